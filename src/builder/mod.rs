//! Builder API and configuration.
//!
//! This module provides a fluent builder and a serializable configuration
//! for coffee machines, plus the [`inputs!`](crate::inputs) macro for
//! writing input scripts.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::MachineConfig;
pub use error::ConfigError;
pub use machine::MachineBuilder;
