//! Core coffee machine automaton.
//!
//! This module is the pure core of the crate:
//! - The input alphabet ([`Token`]) and input shapes ([`Input`])
//! - Output status codes with their fixed numeric encoding ([`StatusCode`])
//! - The seven states and the transition table ([`MachineState`])
//! - The dispatcher that owns the current state ([`CoffeeMachine`])
//!
//! Nothing here logs, persists, or performs I/O.

mod alphabet;
mod error;
mod input;
mod machine;
mod state;
mod status;

pub use alphabet::Token;
pub use error::ParseError;
pub use input::{Input, InputViolation};
pub use machine::CoffeeMachine;
pub use state::{CleanPolicy, MachineState, Outcome};
pub use status::StatusCode;
