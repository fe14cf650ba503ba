//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur when writing, reading or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("JSON checkpoint encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary checkpoint encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// History and counters disagree, so the checkpoint was edited or truncated.
    #[error("Inconsistent checkpoint: {0}")]
    Inconsistent(String),
}
