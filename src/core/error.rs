//! Parse errors for the textual forms of the alphabet, states and status codes.

use thiserror::Error;

/// Errors that can occur when reading tokens, inputs, states or status codes
/// from their external representations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown token '{0}'. Expected one of: water, pod, button, clean")]
    UnknownToken(String),

    #[error("Unknown state '{0}'. Expected one of: a, b, c, d, d_prime, e, f")]
    UnknownState(String),

    #[error("Unknown status code {0}. Expected 0 (ERROR), 1 (OK) or 2 (COFFEE_PRODUCED)")]
    UnknownStatusCode(u8),

    #[error("Input is empty")]
    EmptyInput,

    #[error("Unterminated batch '{0}'. Batches are written as [water,pod]")]
    UnterminatedBatch(String),
}
