//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod balance;
pub mod entities;
pub mod error;

pub use balance::{balance, TEAM_COUNT};
pub use entities::{PlayerRecord, Team};
pub use error::DomainError;
