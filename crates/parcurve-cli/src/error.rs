//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: '{0}'. Use YYYY/MM/DD.")]
    InvalidDate(String),

    /// Standard input closed before a date was entered.
    #[error("No date entered")]
    NoInput,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
