//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(InfraError::Io { source, .. }) => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    crate::exitcode::NOINPUT
                } else {
                    crate::exitcode::IOERR
                }
            }
            CliError::Infra(InfraError::Application(app)) => match app {
                ApplicationError::Domain(domain) => match domain {
                    DomainError::InvalidHeight { .. } | DomainError::MissingField { .. } => {
                        crate::exitcode::DATAERR
                    }
                    DomainError::ScheduleNotFound(_)
                    | DomainError::TeamCount(_)
                    | DomainError::DuplicateTeamName(_)
                    | DomainError::EmptyTeamName => crate::exitcode::CONFIG,
                },
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}
