//! Step history tracking.
//!
//! Provides an ordered record of every input a session applied, following
//! the same value semantics as the rest of the crate: recording consumes the
//! history and returns the extended one.

use super::observation::{EncodedStep, Observation};
use crate::core::{Input, MachineState, StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied input.
///
/// # Example
///
/// ```rust
/// use coffee_fsm::core::{Input, MachineState, StatusCode, Token};
/// use coffee_fsm::session::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     step: 1,
///     input: Input::single(Token::Pod),
///     from: MachineState::A,
///     to: MachineState::B,
///     status: StatusCode::Ok,
///     timestamp: Utc::now(),
/// };
///
/// let row = record.encoded();
/// assert_eq!((row.input, row.output, row.state), (1, 1, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based position of this step in the session
    pub step: usize,
    /// The input that was applied
    pub input: Input,
    /// State before the input
    pub from: MachineState,
    /// State after the input
    pub to: MachineState,
    /// Status the machine produced
    pub status: StatusCode,
    /// When the input was applied
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// What an observer of the machine saw for this step.
    pub fn observation(&self) -> Observation {
        Observation {
            previous_state: self.from,
            status: self.status,
            current_state: self.to,
        }
    }

    /// The integer dataset row for this step.
    pub fn encoded(&self) -> EncodedStep {
        EncodedStep {
            step: self.step,
            input: self.input.category_code(),
            output: self.status.code(),
            state: self.to.code(),
        }
    }
}

/// Ordered history of applied inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepHistory {
    steps: Vec<StepRecord>,
}

impl StepHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning the extended history.
    pub fn record(mut self, step: StepRecord) -> Self {
        self.steps.push(step);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first step, then the `to` state of
    /// each step. External resets between steps are not part of the path.
    pub fn get_path(&self) -> Vec<MachineState> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Status of every step, in order.
    pub fn statuses(&self) -> Vec<StatusCode> {
        self.steps.iter().map(|step| step.status).collect()
    }

    /// Integer dataset rows for every step, in order.
    pub fn encoded(&self) -> Vec<EncodedStep> {
        self.steps.iter().map(StepRecord::encoded).collect()
    }

    /// Time between the first and last step, `None` if empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
