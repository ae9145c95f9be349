//! Season build orchestration
//!
//! Wires the pipeline together: import roster, balance teams, render
//! documents, write them out. No error is caught or recovered here;
//! failures propagate, and files already written stay on disk (there is
//! no transactional guarantee).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{documents, ImportStats, RosterImportService};
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{balance, Team};
use crate::infrastructure::traits::FileSystem;

/// Outcome of a season build, for CLI reporting.
#[derive(Debug)]
pub struct SeasonReport {
    pub teams: Vec<Team>,
    /// Paths written, in write order (rosters before their team's letters)
    pub files_written: Vec<PathBuf>,
}

/// Service orchestrating the full league pipeline.
pub struct LeagueService {
    settings: Arc<Settings>,
    fs: Arc<dyn FileSystem>,
}

impl LeagueService {
    pub fn new(settings: Arc<Settings>, fs: Arc<dyn FileSystem>) -> Self {
        Self { settings, fs }
    }

    /// Build the season: balance teams and write rosters and letters.
    ///
    /// `roster` and `output_dir` override the configured paths when given.
    pub fn build_season(
        &self,
        roster: Option<&Path>,
        output_dir: Option<&Path>,
    ) -> ApplicationResult<SeasonReport> {
        let out_dir = output_dir.unwrap_or(&self.settings.output_dir);
        debug!("build_season: output_dir={}", out_dir.display());

        let teams = self.balanced_teams(roster)?;
        let template = self.settings.league_template();
        let documents = documents::season_documents(&teams, &template)?;

        self.fs
            .create_dir_all(out_dir)
            .with_path_context("create output directory", out_dir)?;

        let mut files_written = Vec::with_capacity(documents.len());
        for doc in &documents {
            let path = out_dir.join(&doc.filename);
            self.fs
                .write(&path, &doc.content)
                .with_path_context("write document", &path)?;
            files_written.push(path);
        }
        debug!("build_season: wrote {} files", files_written.len());

        Ok(SeasonReport {
            teams,
            files_written,
        })
    }

    /// Balance only; nothing is rendered or written.
    pub fn preview(&self, roster: Option<&Path>) -> ApplicationResult<Vec<Team>> {
        self.balanced_teams(roster)
    }

    /// Import only, returning roster counts.
    pub fn check(&self, roster: Option<&Path>) -> ApplicationResult<ImportStats> {
        let players = self.import().load(self.roster_path(roster))?;
        Ok(ImportStats::from_players(&players))
    }

    fn balanced_teams(&self, roster: Option<&Path>) -> ApplicationResult<Vec<Team>> {
        let players = self.import().load(self.roster_path(roster))?;
        let teams = balance(players, &self.settings.team_names())?;
        Ok(teams)
    }

    fn import(&self) -> RosterImportService {
        RosterImportService::new(self.fs.clone())
    }

    fn roster_path<'a>(&'a self, roster: Option<&'a Path>) -> &'a Path {
        roster.unwrap_or(&self.settings.roster_file)
    }
}
