//! Output status codes.
//!
//! The numeric encoding `ERROR=0, OK=1, COFFEE_PRODUCED=2` is an external
//! contract: dataset columns store the integer directly. Every serde format
//! sees the bare integer.

use super::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status produced by a single transition.
///
/// # Example
///
/// ```rust
/// use coffee_fsm::core::StatusCode;
///
/// assert_eq!(StatusCode::Ok.code(), 1);
/// assert_eq!(StatusCode::Error.code(), 0);
/// assert_eq!(StatusCode::CoffeeProduced.code(), 2);
/// assert_eq!(serde_json::to_string(&StatusCode::CoffeeProduced).unwrap(), "2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum StatusCode {
    Error = 0,
    Ok = 1,
    CoffeeProduced = 2,
}

impl StatusCode {
    /// The fixed numeric encoding.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a status from its numeric encoding.
    pub fn from_code(code: u8) -> Result<StatusCode, ParseError> {
        match code {
            0 => Ok(StatusCode::Error),
            1 => Ok(StatusCode::Ok),
            2 => Ok(StatusCode::CoffeeProduced),
            other => Err(ParseError::UnknownStatusCode(other)),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, StatusCode::Error)
    }

    /// Label used in logs and the interactive demo.
    pub fn label(self) -> &'static str {
        match self {
            StatusCode::Error => "ERROR",
            StatusCode::Ok => "OK",
            StatusCode::CoffeeProduced => "COFFEE_PRODUCED",
        }
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> u8 {
        status.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        StatusCode::from_code(code).map_err(serde::de::Error::custom)
    }
}
