//! teamforge: balanced soccer teams from a roster CSV
//!
//! Reads a league roster, partitions the players into three teams with
//! roughly equal average height and an even split of experienced players,
//! and renders per-team roster sheets plus per-player welcome letters.
//!
//! Layers:
//! - [`domain`]: players, teams, and the balancing algorithm (no I/O)
//! - [`application`]: roster import, document rendering, season orchestration
//! - [`infrastructure`]: filesystem boundary trait and service wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult};
pub use config::{Settings, TeamConfig};
pub use domain::{balance, DomainError, PlayerRecord, Team, TEAM_COUNT};
