//! Builder for constructing coffee machines and sessions.

use crate::builder::config::MachineConfig;
use crate::core::{CleanPolicy, CoffeeMachine, MachineState};
use crate::session::Session;

/// Builder for coffee machines with a fluent API.
///
/// Unset fields fall back to [`MachineConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    initial: Option<MachineState>,
    clean_policy: Option<CleanPolicy>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state.
    pub fn initial(mut self, state: MachineState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the behavior of `clean` while loaded.
    pub fn clean_policy(mut self, policy: CleanPolicy) -> Self {
        self.clean_policy = Some(policy);
        self
    }

    /// Take every field from a configuration.
    pub fn config(self, config: MachineConfig) -> Self {
        self.initial(config.initial_state)
            .clean_policy(config.clean_policy)
    }

    /// The configuration this builder describes.
    pub fn to_config(&self) -> MachineConfig {
        let defaults = MachineConfig::default();
        MachineConfig {
            initial_state: self.initial.unwrap_or(defaults.initial_state),
            clean_policy: self.clean_policy.unwrap_or(defaults.clean_policy),
        }
    }

    /// Build the machine.
    pub fn build(self) -> CoffeeMachine {
        let config = self.to_config();
        CoffeeMachine::from_parts(config.initial_state, config.clean_policy)
    }

    /// Build a recording session around the machine.
    pub fn build_session(self) -> Session {
        Session::with_config(self.to_config())
    }
}
