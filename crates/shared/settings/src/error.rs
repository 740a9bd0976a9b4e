//! Configuration errors.
//!
//! A single error type covers every way settings can be rejected at startup.
//! Messages name the offending variable but never include secret values.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required variable is not set
    #[error("{key} must be set")]
    Missing { key: &'static str },

    /// Variable is set but blank
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    /// Variable still holds a placeholder value
    #[error("{key} still holds a placeholder value")]
    Placeholder { key: &'static str },

    /// Variable is set to something unusable
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// Signing secret below the minimum length
    #[error("{key} must be at least {min} bytes long")]
    WeakSecret { key: &'static str, min: usize },

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Environment variable this error refers to, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Missing { key }
            | ConfigError::Empty { key }
            | ConfigError::Placeholder { key }
            | ConfigError::Invalid { key, .. }
            | ConfigError::WeakSecret { key, .. } => Some(*key),
            ConfigError::UnknownEnvironment(_)
            | ConfigError::UnknownKey(_)
            | ConfigError::EnvFile { .. } => None,
        }
    }

    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
