//! CLI error type.

use thiserror::Error;
use vboedit::config::ConfigError;
use vboedit::logging::LoggingError;
use vboedit::VboError;

/// Errors reported by `vboedit` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error(transparent)]
    Vbo(#[from] VboError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("column '{0}' not found in file")]
    UnknownColumn(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::ConfigFile(_) => 2,
            _ => 1,
        }
    }
}
