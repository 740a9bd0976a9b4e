//! CLI error handling.

use thiserror::Error;

use supportflow_settings::ConfigError;

/// Errors a command can fail with
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type CliResult<T> = Result<T, CliError>;
