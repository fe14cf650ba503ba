//! Coffee FSM: a deterministic finite-state machine for a coffee machine
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! automaton is a closed set of states, an input alphabet, and one total
//! transition function; everything with side effects (timestamps, logging,
//! persistence) lives in the shell around it.
//!
//! # Core Concepts
//!
//! - **Token / Input**: `water`, `pod`, `button`, `clean`, or a batch of
//!   ingredients while the machine is loaded
//! - **StatusCode**: `ERROR=0`, `OK=1`, `COFFEE_PRODUCED=2`
//! - **MachineState**: `a`, `b`, `c`, `d`, `d_prime`, `e`, and the trap `f`
//! - **CoffeeMachine**: owns the current state; `transition` never fails
//! - **Session**: a machine plus its recorded history
//!
//! # Example
//!
//! ```rust
//! use coffee_fsm::core::{CoffeeMachine, Input, StatusCode, Token};
//!
//! let mut machine = CoffeeMachine::new();
//! assert_eq!(machine.transition(&Input::single(Token::Pod)), StatusCode::Ok);
//! assert_eq!(machine.transition(&Input::single(Token::Water)), StatusCode::Ok);
//! assert_eq!(
//!     machine.transition(&Input::batch([Token::Water, Token::Pod])),
//!     StatusCode::Ok
//! );
//! assert_eq!(
//!     machine.transition(&Input::single(Token::Button)).code(),
//!     2
//! );
//! assert_eq!(machine.current_state_name(), "e");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use builder::{MachineBuilder, MachineConfig};
pub use crate::core::{CleanPolicy, CoffeeMachine, Input, MachineState, StatusCode, Token};
pub use session::Session;
