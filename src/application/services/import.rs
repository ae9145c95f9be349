//! Roster import service
//!
//! Decodes the player roster CSV into domain records. Columns are resolved
//! by header name so the roster may carry extra columns or reorder them.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DomainError, PlayerRecord};
use crate::infrastructure::traits::FileSystem;

const COL_NAME: &str = "Name";
const COL_GUARDIANS: &str = "Guardian Name(s)";
const COL_EXPERIENCE: &str = "Soccer Experience";
const COL_HEIGHT: &str = "Height (inches)";

/// Roster value marking an experienced player; anything else is a novice.
const EXPERIENCED: &str = "YES";

/// Counts from a parsed roster, reported by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub rows: usize,
    pub experienced: usize,
    pub novice: usize,
}

impl ImportStats {
    pub fn from_players(players: &[PlayerRecord]) -> Self {
        let experienced = players.iter().filter(|p| p.experienced).count();
        Self {
            rows: players.len(),
            experienced,
            novice: players.len() - experienced,
        }
    }
}

/// Service for loading player records from a roster CSV.
pub struct RosterImportService {
    fs: Arc<dyn FileSystem>,
}

impl RosterImportService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load all players from the roster file, preserving row order.
    ///
    /// Fails on the first malformed row; no partial result is returned.
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<PlayerRecord>> {
        debug!("load: path={}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read roster", path)?;
        let players = parse_roster(&content)?;
        debug!("load: {} players", players.len());
        Ok(players)
    }
}

/// Decode roster CSV content into player records.
///
/// Row numbers in errors are 1-based data rows (0 denotes the header row).
pub fn parse_roster(content: &str) -> ApplicationResult<Vec<PlayerRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ApplicationError::OperationFailed {
            context: "decode roster header".to_string(),
            source: Box::new(e),
        })?
        .clone();

    let name_idx = column_index(&headers, COL_NAME)?;
    let guardians_idx = column_index(&headers, COL_GUARDIANS)?;
    let experience_idx = column_index(&headers, COL_EXPERIENCE)?;
    let height_idx = column_index(&headers, COL_HEIGHT)?;

    let mut players = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| ApplicationError::OperationFailed {
            context: format!("decode roster row {}", row),
            source: Box::new(e),
        })?;

        let height_raw = record_field(&record, height_idx, row, COL_HEIGHT)?;
        let height_inches =
            height_raw
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidHeight {
                    row,
                    value: height_raw.to_string(),
                })?;

        players.push(PlayerRecord {
            name: record_field(&record, name_idx, row, COL_NAME)?.to_string(),
            guardians: record_field(&record, guardians_idx, row, COL_GUARDIANS)?.to_string(),
            height_inches,
            experienced: record_field(&record, experience_idx, row, COL_EXPERIENCE)? == EXPERIENCED,
        });
    }

    Ok(players)
}

fn column_index(
    headers: &csv::StringRecord,
    column: &'static str,
) -> Result<usize, DomainError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(DomainError::MissingField { row: 0, column })
}

fn record_field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<&'r str, DomainError> {
    record
        .get(idx)
        .ok_or(DomainError::MissingField { row, column })
}
