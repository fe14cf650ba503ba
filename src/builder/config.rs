//! Serializable machine configuration.

use crate::builder::error::ConfigError;
use crate::core::{CleanPolicy, MachineState};
use serde::{Deserialize, Serialize};

/// Configuration for a coffee machine.
///
/// Every field has a default, so `{}` is a valid configuration describing a
/// machine that starts in `a` and resets on `clean` while loaded.
///
/// # Example
///
/// ```rust
/// use coffee_fsm::builder::MachineConfig;
/// use coffee_fsm::core::{CleanPolicy, MachineState};
///
/// let config = MachineConfig::from_json(r#"{"clean_policy": "reject"}"#).unwrap();
/// assert_eq!(config.initial_state, MachineState::A);
/// assert_eq!(config.clean_policy, CleanPolicy::Reject);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// State the machine starts in, and returns to on an external reset
    pub initial_state: MachineState,
    /// Behavior of `clean` while loaded
    pub clean_policy: CleanPolicy,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
