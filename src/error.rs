//! Error types for the navigation shell

use thiserror::Error;

/// Errors raised at the edges of the shell (parsing ids, loading config).
///
/// The component tree itself never fails.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Invalid shell configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Invalid log level '{0}' - expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Logger initialisation failed: {0}")]
    LoggerInit(String),
}

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
