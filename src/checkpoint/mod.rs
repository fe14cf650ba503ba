//! Checkpoint and resume functionality for sessions.
//!
//! A checkpoint captures everything needed to continue a session later:
//! configuration, current state, step history and counters. Checkpoints are
//! written as JSON for inspection or as a compact binary encoding.

use crate::builder::MachineConfig;
use crate::core::{MachineState, StatusCode};
use crate::session::{Session, SessionMetadata, StepHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a session.
///
/// # Example
///
/// ```rust
/// use coffee_fsm::checkpoint::Checkpoint;
/// use coffee_fsm::inputs;
/// use coffee_fsm::session::Session;
///
/// let mut session = Session::new();
/// session.run(inputs![pod, water]);
///
/// let json = Checkpoint::capture(&session).to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
///
/// assert_eq!(restored.current_state_name(), "d");
/// assert_eq!(restored.history().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Configuration the session was created with
    pub config: MachineConfig,

    /// Current state of the machine
    pub current_state: MachineState,

    /// Complete step history
    pub history: StepHistory,

    /// Session counters
    pub metadata: SessionMetadata,
}

impl Checkpoint {
    /// Snapshot a session.
    pub fn capture(session: &Session) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            config: *session.config(),
            current_state: session.current_state(),
            history: session.history().clone(),
            metadata: session.metadata().clone(),
        };

        debug!(
            id = %checkpoint.id,
            state = checkpoint.current_state.name(),
            steps = checkpoint.history.len(),
            "Captured checkpoint"
        );
        checkpoint
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Read and validate a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the version, replay every recorded step against the transition
    /// table, and check that the counters agree with the history.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        for (index, record) in self.history.steps().iter().enumerate() {
            if record.step != index + 1 {
                return Err(CheckpointError::Inconsistent(format!(
                    "step {} recorded at position {}",
                    record.step,
                    index + 1
                )));
            }

            let replayed = record
                .from
                .process_with(&record.input, self.config.clean_policy);
            if (replayed.status, replayed.next) != (record.status, record.to) {
                return Err(CheckpointError::Inconsistent(format!(
                    "step {} records {} + {} -> ({}, {}), but the machine gives ({}, {})",
                    record.step,
                    record.from,
                    record.input,
                    record.status,
                    record.to,
                    replayed.status,
                    replayed.next
                )));
            }
        }

        let statuses = self.history.statuses();
        let coffees = statuses
            .iter()
            .filter(|s| **s == StatusCode::CoffeeProduced)
            .count();
        let errors = statuses.iter().filter(|s| s.is_error()).count();

        if coffees != self.metadata.coffees_produced {
            return Err(CheckpointError::Inconsistent(format!(
                "history has {} coffees produced, metadata says {}",
                coffees, self.metadata.coffees_produced
            )));
        }
        if errors != self.metadata.errors {
            return Err(CheckpointError::Inconsistent(format!(
                "history has {} errors, metadata says {}",
                errors, self.metadata.errors
            )));
        }

        Ok(())
    }

    /// Validate and turn the checkpoint back into a live session.
    pub fn restore(self) -> Result<Session, CheckpointError> {
        self.validate()?;

        info!(
            id = %self.id,
            state = self.current_state.name(),
            steps = self.history.len(),
            "Restored session from checkpoint"
        );

        Ok(Session::from_parts(
            self.config,
            self.current_state,
            self.history,
            self.metadata,
        ))
    }
}
