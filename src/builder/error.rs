//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when reading or writing a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid machine configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
