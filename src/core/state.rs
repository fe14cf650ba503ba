//! Machine states and the transition table.
//!
//! States are plain identities with no data. The whole automaton lives in
//! [`MachineState::process_with`], one exhaustive match that reads like the
//! transition table it implements.

use super::alphabet::Token;
use super::error::ParseError;
use super::input::Input;
use super::status::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven states of the coffee machine.
///
/// - `A`: empty, idle
/// - `B`: pod loaded
/// - `C`: water loaded
/// - `D`: pod then water, ready to brew
/// - `DPrime`: water then pod, ready to brew
/// - `E`: coffee produced, waiting for clean
/// - `F`: trap state, absorbs every input
///
/// States serialize as their canonical external names: `"a"`, `"b"`, `"c"`,
/// `"d"`, `"d_prime"`, `"e"`, `"f"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineState {
    #[default]
    A,
    B,
    C,
    D,
    DPrime,
    E,
    F,
}

/// What `clean` does while the machine is loaded (D or D′).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanPolicy {
    /// `clean` discards the load: `OK`, back to `A`.
    #[default]
    Reset,
    /// `clean` is refused: `ERROR`, the machine stays loaded.
    Reject,
}

/// The `(status, next state)` pair produced by one transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub next: MachineState,
}

impl Outcome {
    pub fn new(status: StatusCode, next: MachineState) -> Self {
        Self { status, next }
    }

    fn ok(next: MachineState) -> Self {
        Self::new(StatusCode::Ok, next)
    }

    fn trap() -> Self {
        Self::new(StatusCode::Error, MachineState::F)
    }

    pub fn into_parts(self) -> (StatusCode, MachineState) {
        (self.status, self.next)
    }
}

/// Column of the transition table an input falls into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Symbol {
    Token(Token),
    Batch,
    Invalid,
}

impl Symbol {
    fn classify(input: &Input) -> Self {
        match input {
            Input::Single(token) => Symbol::Token(*token),
            batch if batch.is_valid_batch() => Symbol::Batch,
            Input::Batch(_) => Symbol::Invalid,
        }
    }
}

impl MachineState {
    /// Every state, ordered by categorical code.
    pub const ALL: [MachineState; 7] = [
        MachineState::A,
        MachineState::B,
        MachineState::C,
        MachineState::D,
        MachineState::DPrime,
        MachineState::E,
        MachineState::F,
    ];

    /// Canonical external name, consumed verbatim by dataset tooling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::DPrime => "d_prime",
            Self::E => "e",
            Self::F => "f",
        }
    }

    /// Categorical code: a=0, b=1, c=2, d=3, d_prime=4, e=5, f=6.
    pub fn code(&self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::DPrime => 4,
            Self::E => 5,
            Self::F => 6,
        }
    }

    /// The absorbing trap state.
    pub fn is_trap(&self) -> bool {
        matches!(self, Self::F)
    }

    /// Both ingredients loaded (D or D′); the only states that accept batches.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::D | Self::DPrime)
    }

    /// Apply one input under the default [`CleanPolicy`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use coffee_fsm::core::{Input, MachineState, StatusCode, Token};
    ///
    /// let outcome = MachineState::D.process(&Input::single(Token::Button));
    /// assert_eq!(outcome.status, StatusCode::CoffeeProduced);
    /// assert_eq!(outcome.next, MachineState::E);
    /// ```
    pub fn process(self, input: &Input) -> Outcome {
        self.process_with(input, CleanPolicy::default())
    }

    /// Apply one input. Pure and total: every `(state, input)` pair has
    /// exactly one outcome.
    pub fn process_with(self, input: &Input, policy: CleanPolicy) -> Outcome {
        use MachineState::*;
        use Token::*;

        match (self, Symbol::classify(input)) {
            (F, _) => Outcome::trap(),
            (_, Symbol::Invalid) => Outcome::trap(),

            (D | DPrime, Symbol::Batch) => Outcome::ok(self),
            (_, Symbol::Batch) => Outcome::trap(),

            (A | B | C | E, Symbol::Token(Clean)) => Outcome::ok(A),
            (D | DPrime, Symbol::Token(Clean)) => match policy {
                CleanPolicy::Reset => Outcome::ok(A),
                CleanPolicy::Reject => Outcome::new(StatusCode::Error, self),
            },

            (A, Symbol::Token(Pod)) => Outcome::ok(B),
            (A, Symbol::Token(Water)) => Outcome::ok(C),
            (B, Symbol::Token(Pod)) => Outcome::ok(B),
            (B, Symbol::Token(Water)) => Outcome::ok(D),
            (C, Symbol::Token(Pod)) => Outcome::ok(DPrime),
            (C, Symbol::Token(Water)) => Outcome::ok(C),
            (A | B | C, Symbol::Token(Button)) => Outcome::trap(),

            (D | DPrime, Symbol::Token(Button)) => Outcome::new(StatusCode::CoffeeProduced, E),
            (D | DPrime, Symbol::Token(Water | Pod)) => Outcome::trap(),

            (E, Symbol::Token(Water | Pod | Button)) => Outcome::trap(),
        }
    }

    /// Outcome for input that cannot be read at all, e.g. unparseable text.
    /// Classified like any other invalid input.
    pub fn reject_invalid(self) -> Outcome {
        Outcome::trap()
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MachineState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        MachineState::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownState(name.to_string()))
    }
}
