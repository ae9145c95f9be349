//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the classic three-team league)
//! 2. Global config: `$XDG_CONFIG_HOME/teamforge/teamforge.toml`
//! 3. Local config: `./league.toml` (or `--config <FILE>`)
//! 4. Environment variables: `TEAMFORGE_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::LeagueTemplate;
use crate::application::ApplicationError;
use crate::domain::TEAM_COUNT;

/// Local config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "league.toml";

/// One team slot in the league.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamConfig {
    pub name: String,
    /// First practice date/time, reproduced verbatim in rosters and letters
    pub first_practice: String,
}

impl TeamConfig {
    fn new(name: &str, first_practice: &str) -> Self {
        Self {
            name: name.to_string(),
            first_practice: first_practice.to_string(),
        }
    }
}

/// Unified configuration for teamforge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Player roster CSV
    pub roster_file: PathBuf,
    /// Where rosters and letters are written
    pub output_dir: PathBuf,
    /// Stadium named in welcome letters
    pub stadium: String,
    /// Sign-off on welcome letters
    pub coach: String,
    /// The three teams and their practice slots
    pub teams: Vec<TeamConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_file: PathBuf::from("soccer_players.csv"),
            output_dir: PathBuf::from("."),
            stadium: "Treehouse Stadium".to_string(),
            coach: "Coach Kicks".to_string(),
            teams: vec![
                TeamConfig::new("Dragons", "March 17, 2016 @ 1:00PM"),
                TeamConfig::new("Sharks", "March 17, 2016 @ 3:00PM"),
                TeamConfig::new("Raptors", "March 18, 2016 @ 1:00PM"),
            ],
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified" during layered merging).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    roster_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    stadium: Option<String>,
    coach: Option<String>,
    teams: Option<Vec<TeamConfig>>,
}

/// Get the XDG config directory for teamforge.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "teamforge").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("teamforge.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Explicit local config path; when `None`, `./league.toml`
    ///   is used if it exists.
    ///
    /// A missing explicit `local` path is an error; the implicit default
    /// file is simply skipped when absent. Teams always REPLACE the
    /// previous layer's teams wholesale (a partial league makes no sense).
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merged_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config
        match local {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                current = current.merged_with(&load_raw_settings(path)?);
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    current = current.merged_with(&load_raw_settings(default_path)?);
                }
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        current.validate()?;
        Ok(current)
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merged_with(&self, overlay: &RawSettings) -> Self {
        Self {
            roster_file: overlay
                .roster_file
                .clone()
                .unwrap_or_else(|| self.roster_file.clone()),
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
            stadium: overlay
                .stadium
                .clone()
                .unwrap_or_else(|| self.stadium.clone()),
            coach: overlay.coach.clone().unwrap_or_else(|| self.coach.clone()),
            teams: overlay.teams.clone().unwrap_or_else(|| self.teams.clone()),
        }
    }

    /// Apply TEAMFORGE_* environment variables as explicit overrides.
    ///
    /// Team tables only come from config files; there is no sensible
    /// single-variable encoding for them.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("TEAMFORGE").separator("__"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("roster_file") {
            settings.roster_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("stadium") {
            settings.stadium = val;
        }
        if let Ok(val) = config.get_string("coach") {
            settings.coach = val;
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.roster_file = PathBuf::from(expand_path(&self.roster_file.to_string_lossy()));
        self.output_dir = PathBuf::from(expand_path(&self.output_dir.to_string_lossy()));
    }

    /// Check league shape: exactly three teams, distinct non-empty names.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.teams.len() != TEAM_COUNT {
            return Err(ApplicationError::Config {
                message: format!(
                    "league needs exactly {} teams, config has {}",
                    TEAM_COUNT,
                    self.teams.len()
                ),
            });
        }
        for (i, team) in self.teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(ApplicationError::Config {
                    message: "team name must not be empty".to_string(),
                });
            }
            if self.teams[..i].iter().any(|t| t.name == team.name) {
                return Err(ApplicationError::Config {
                    message: format!("duplicate team name: {}", team.name),
                });
            }
        }
        Ok(())
    }

    /// Team names in configured order.
    pub fn team_names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    /// The immutable rendering inputs derived from this configuration.
    pub fn league_template(&self) -> LeagueTemplate {
        LeagueTemplate {
            schedule: self
                .teams
                .iter()
                .map(|t| (t.name.clone(), t.first_practice.clone()))
                .collect::<BTreeMap<_, _>>(),
            stadium: self.stadium.clone(),
            coach: self.coach.clone(),
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# teamforge configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/teamforge/teamforge.toml  (defines your baseline)
#   Local:  ./league.toml                       (per-league settings)
#   Env:    TEAMFORGE_* environment variables   (explicit overrides)
#
# A [[teams]] list in any layer replaces the previous layer's teams
# wholesale. The league always has exactly three teams.

# Player roster CSV
# roster_file = "soccer_players.csv"

# Where rosters and letters are written
# output_dir = "."

# Stadium named in welcome letters
# stadium = "Treehouse Stadium"

# Sign-off on welcome letters
# coach = "Coach Kicks"

[[teams]]
name = "Dragons"
first_practice = "March 17, 2016 @ 1:00PM"

[[teams]]
name = "Sharks"
first_practice = "March 17, 2016 @ 3:00PM"

[[teams]]
name = "Raptors"
first_practice = "March 18, 2016 @ 1:00PM"
"#
        .to_string()
    }
}

/// Expand `~`, `$VAR`, and `${VAR}` in a path string.
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
