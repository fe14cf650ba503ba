//! What external tooling sees of a step.

use crate::core::{MachineState, StatusCode};
use serde::{Deserialize, Serialize};

/// The machine as seen by a driver after one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub previous_state: MachineState,
    pub status: StatusCode,
    pub current_state: MachineState,
}

/// One integer row of a generated dataset.
///
/// Column names and codes match the dataset files the training tooling
/// reads: the input column uses the token code (`-1` for a batch), the
/// output column the status code, the state column the state code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedStep {
    pub step: usize,
    #[serde(rename = "input_sequence")]
    pub input: i8,
    #[serde(rename = "output_sequence")]
    pub output: u8,
    #[serde(rename = "current_state")]
    pub state: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_step_uses_dataset_column_names() {
        let row = EncodedStep {
            step: 4,
            input: 2,
            output: 2,
            state: 5,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"step":4,"input_sequence":2,"output_sequence":2,"current_state":5}"#
        );
    }

    #[test]
    fn observation_serializes_names_and_codes() {
        let observation = Observation {
            previous_state: MachineState::DPrime,
            status: StatusCode::CoffeeProduced,
            current_state: MachineState::E,
        };
        let json = serde_json::to_string(&observation).unwrap();
        assert_eq!(
            json,
            r#"{"previous_state":"d_prime","status":2,"current_state":"e"}"#
        );
    }
}
