//! Recording sessions around a coffee machine.
//!
//! A [`Session`] is the imperative shell around the pure core: it owns one
//! [`CoffeeMachine`], records every applied input in a [`StepHistory`],
//! keeps counters, and emits structured `tracing` events. Drivers such as
//! dataset generators or training loops talk to a session instead of
//! bookkeeping themselves.
//!
//! # Example
//!
//! ```rust
//! use coffee_fsm::inputs;
//! use coffee_fsm::core::StatusCode;
//! use coffee_fsm::session::Session;
//!
//! let mut session = Session::new();
//! let statuses = session.run(inputs![pod, water, [water, pod], button, clean]);
//!
//! assert_eq!(statuses.last(), Some(&StatusCode::Ok));
//! assert_eq!(session.metadata().coffees_produced, 1);
//! assert_eq!(session.history().len(), 5);
//! ```

mod history;
mod observation;

pub use history::{StepHistory, StepRecord};
pub use observation::{EncodedStep, Observation};

use crate::builder::MachineConfig;
use crate::core::{CoffeeMachine, Input, MachineState, StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Counters tracked by a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// Last step or reset
    pub updated_at: DateTime<Utc>,
    /// Steps that produced coffee
    pub coffees_produced: usize,
    /// Steps that returned ERROR
    pub errors: usize,
    /// External resets performed through [`Session::reset`]
    pub resets: usize,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            coffees_produced: 0,
            errors: 0,
            resets: 0,
        }
    }
}

/// A coffee machine together with its step history.
#[derive(Clone, Debug)]
pub struct Session {
    config: MachineConfig,
    machine: CoffeeMachine,
    history: StepHistory,
    metadata: SessionMetadata,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session around a default machine.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            config,
            machine: CoffeeMachine::from_parts(config.initial_state, config.clean_policy),
            history: StepHistory::new(),
            metadata: SessionMetadata::default(),
        }
    }

    pub(crate) fn from_parts(
        config: MachineConfig,
        current: MachineState,
        history: StepHistory,
        metadata: SessionMetadata,
    ) -> Self {
        Self {
            config,
            machine: CoffeeMachine::from_parts(current, config.clean_policy),
            history,
            metadata,
        }
    }

    /// Apply one input and record it.
    pub fn step(&mut self, input: Input) -> &StepRecord {
        let from = self.machine.current_state();
        let outcome = self.machine.advance(&input);
        let now = Utc::now();

        let record = StepRecord {
            step: self.history.len() + 1,
            input,
            from,
            to: outcome.next,
            status: outcome.status,
            timestamp: now,
        };

        debug!(
            step = record.step,
            input = %record.input,
            from = record.from.name(),
            to = record.to.name(),
            status = record.status.code(),
            "Applied input"
        );

        match record.status {
            StatusCode::CoffeeProduced => {
                self.metadata.coffees_produced += 1;
                info!(step = record.step, from = record.from.name(), "Coffee produced");
            }
            StatusCode::Error => self.metadata.errors += 1,
            StatusCode::Ok => {}
        }

        if record.to.is_trap() && !record.from.is_trap() {
            warn!(
                step = record.step,
                input = %record.input,
                from = record.from.name(),
                "Machine entered the trap state; only an external reset leaves it"
            );
        }

        self.metadata.updated_at = now;
        let index = self.history.len();
        self.history = std::mem::take(&mut self.history).record(record);
        &self.history.steps()[index]
    }

    /// Apply every input in order, returning the statuses.
    pub fn run<I>(&mut self, inputs: I) -> Vec<StatusCode>
    where
        I: IntoIterator<Item = Input>,
    {
        inputs
            .into_iter()
            .map(|input| self.step(input).status)
            .collect()
    }

    /// Put the machine back in its configured initial state.
    ///
    /// This is the external reset a driver performs after an error or a
    /// produced coffee. It is not a step and is not recorded in the history.
    pub fn reset(&mut self) {
        let from = self.machine.current_state();
        self.machine.overwrite_state(self.config.initial_state);
        self.metadata.resets += 1;
        self.metadata.updated_at = Utc::now();

        info!(
            from = from.name(),
            to = self.config.initial_state.name(),
            resets = self.metadata.resets,
            "Machine reset"
        );
    }

    /// What a driver observes after the latest step, `None` before any step.
    pub fn observe(&self) -> Option<Observation> {
        self.history.last().map(StepRecord::observation)
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn current_state(&self) -> MachineState {
        self.machine.current_state()
    }

    pub fn current_state_name(&self) -> &'static str {
        self.machine.current_state_name()
    }
}
