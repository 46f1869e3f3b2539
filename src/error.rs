//! Error types for the dirkeep marker maintenance system.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Command-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No workspace folder open.")]
    NoWorkspace,

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
