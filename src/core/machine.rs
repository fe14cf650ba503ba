//! The coffee machine dispatcher.

use super::alphabet::Token;
use super::input::Input;
use super::state::{CleanPolicy, MachineState, Outcome};
use super::status::StatusCode;
use serde::{Deserialize, Serialize};

/// A coffee machine: the current state plus the clean policy it runs under.
///
/// The only mutator inside the transition contract is [`transition`]
/// (and its variants), which never fails. [`overwrite_state`] exists for
/// owners that reset the device from outside; it is the only way out of
/// the trap state.
///
/// The machine is a plain value. Callers sharing one across threads must
/// serialize `transition` calls themselves.
///
/// [`transition`]: CoffeeMachine::transition
/// [`overwrite_state`]: CoffeeMachine::overwrite_state
///
/// # Example
///
/// ```rust
/// use coffee_fsm::core::{CoffeeMachine, Input, StatusCode, Token};
///
/// let mut machine = CoffeeMachine::new();
/// let statuses: Vec<StatusCode> = [Token::Pod, Token::Water, Token::Button, Token::Clean]
///     .into_iter()
///     .map(|token| machine.transition(&Input::from(token)))
///     .collect();
///
/// assert_eq!(
///     statuses,
///     vec![StatusCode::Ok, StatusCode::Ok, StatusCode::CoffeeProduced, StatusCode::Ok]
/// );
/// assert_eq!(machine.current_state_name(), "a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeMachine {
    current: MachineState,
    clean_policy: CleanPolicy,
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CoffeeMachine {
    /// A machine in state `A` with the default clean policy.
    pub fn new() -> Self {
        Self::with_policy(CleanPolicy::default())
    }

    pub fn with_policy(clean_policy: CleanPolicy) -> Self {
        Self {
            current: MachineState::A,
            clean_policy,
        }
    }

    pub(crate) fn from_parts(current: MachineState, clean_policy: CleanPolicy) -> Self {
        Self {
            current,
            clean_policy,
        }
    }

    /// Apply one input, commit the next state and return the status.
    pub fn transition(&mut self, input: &Input) -> StatusCode {
        self.advance(input).status
    }

    /// Shorthand for a single-token transition.
    pub fn transition_token(&mut self, token: Token) -> StatusCode {
        self.transition(&Input::Single(token))
    }

    /// Parse `text` as an input and apply it. Text that does not parse is
    /// treated as invalid input.
    pub fn transition_str(&mut self, text: &str) -> StatusCode {
        match text.parse::<Input>() {
            Ok(input) => self.transition(&input),
            Err(_) => self.commit(self.current.reject_invalid()).status,
        }
    }

    /// Like [`CoffeeMachine::transition`] but returns the full outcome.
    pub fn advance(&mut self, input: &Input) -> Outcome {
        let outcome = self.current.process_with(input, self.clean_policy);
        self.commit(outcome)
    }

    fn commit(&mut self, outcome: Outcome) -> Outcome {
        self.current = outcome.next;
        outcome
    }

    pub fn current_state(&self) -> MachineState {
        self.current
    }

    /// Canonical name of the current state: one of
    /// `a`, `b`, `c`, `d`, `d_prime`, `e`, `f`.
    pub fn current_state_name(&self) -> &'static str {
        self.current.name()
    }

    pub fn clean_policy(&self) -> CleanPolicy {
        self.clean_policy
    }

    pub fn is_trapped(&self) -> bool {
        self.current.is_trap()
    }

    /// Reassign the current state directly.
    ///
    /// This sits outside the transition contract: the machine never calls it
    /// on its own. Owners use it for external resets.
    pub fn overwrite_state(&mut self, state: MachineState) {
        self.current = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_a() {
        let machine = CoffeeMachine::new();
        assert_eq!(machine.current_state(), MachineState::A);
        assert_eq!(machine.current_state_name(), "a");
        assert_eq!(machine.clean_policy(), CleanPolicy::Reset);
        assert!(!machine.is_trapped());
    }

    #[test]
    fn transition_commits_next_state() {
        let mut machine = CoffeeMachine::new();

        assert_eq!(machine.transition_token(Token::Water), StatusCode::Ok);
        assert_eq!(machine.current_state(), MachineState::C);

        assert_eq!(machine.transition_token(Token::Pod), StatusCode::Ok);
        assert_eq!(machine.current_state_name(), "d_prime");

        let batch = Input::batch([Token::Water, Token::Pod]);
        assert_eq!(machine.transition(&batch), StatusCode::Ok);
        assert_eq!(machine.current_state(), MachineState::DPrime);

        assert_eq!(machine.transition_token(Token::Button), StatusCode::CoffeeProduced);
        assert_eq!(machine.current_state(), MachineState::E);
    }

    #[test]
    fn trap_is_not_escaped_by_transitions() {
        let mut machine = CoffeeMachine::new();
        assert_eq!(machine.transition_token(Token::Button), StatusCode::Error);
        assert!(machine.is_trapped());

        for token in Token::ALL {
            assert_eq!(machine.transition_token(token), StatusCode::Error);
            assert!(machine.is_trapped());
        }
    }

    #[test]
    fn overwrite_state_is_the_way_out_of_the_trap() {
        let mut machine = CoffeeMachine::new();
        machine.transition_token(Token::Button);
        assert!(machine.is_trapped());

        machine.overwrite_state(MachineState::A);
        assert_eq!(machine.current_state(), MachineState::A);
        assert_eq!(machine.transition_token(Token::Pod), StatusCode::Ok);
    }

    #[test]
    fn transition_str_parses_tokens_and_batches() {
        let mut machine = CoffeeMachine::new();
        assert_eq!(machine.transition_str("pod"), StatusCode::Ok);
        assert_eq!(machine.transition_str("WATER"), StatusCode::Ok);
        assert_eq!(machine.transition_str("water,pod"), StatusCode::Ok);
        assert_eq!(machine.current_state(), MachineState::D);
        assert_eq!(machine.transition_str("button"), StatusCode::CoffeeProduced);
    }

    #[test]
    fn one_element_batch_text_matches_direct_batch() {
        let batch = Input::batch([Token::Pod]);

        let mut direct = CoffeeMachine::with_policy(CleanPolicy::Reset);
        direct.overwrite_state(MachineState::D);
        let mut via_text = direct.clone();

        assert_eq!(direct.transition(&batch), StatusCode::Ok);
        assert_eq!(via_text.transition_str(&batch.to_string()), StatusCode::Ok);
        assert_eq!(via_text.current_state(), direct.current_state());
        assert_eq!(via_text.current_state(), MachineState::D);

        assert_eq!(via_text.transition_str("pod"), StatusCode::Error);
        assert!(via_text.is_trapped());
    }

    #[test]
    fn unparseable_text_is_invalid_input() {
        let mut machine = CoffeeMachine::new();
        machine.transition_token(Token::Pod);

        assert_eq!(machine.transition_str("espresso"), StatusCode::Error);
        assert_eq!(machine.current_state(), MachineState::F);

        let mut fresh = CoffeeMachine::new();
        assert_eq!(fresh.transition_str(""), StatusCode::Error);
        assert!(fresh.is_trapped());
    }

    #[test]
    fn reject_policy_keeps_machine_loaded_on_clean() {
        let mut machine = CoffeeMachine::with_policy(CleanPolicy::Reject);
        machine.transition_token(Token::Pod);
        machine.transition_token(Token::Water);

        assert_eq!(machine.transition_token(Token::Clean), StatusCode::Error);
        assert_eq!(machine.current_state(), MachineState::D);
        assert_eq!(machine.transition_token(Token::Button), StatusCode::CoffeeProduced);
    }

    #[test]
    fn reset_policy_empties_machine_on_clean() {
        let mut machine = CoffeeMachine::with_policy(CleanPolicy::Reset);
        machine.transition_token(Token::Water);
        machine.transition_token(Token::Pod);

        assert_eq!(machine.transition_token(Token::Clean), StatusCode::Ok);
        assert_eq!(machine.current_state(), MachineState::A);
    }

    #[test]
    fn advance_returns_full_outcome() {
        let mut machine = CoffeeMachine::new();
        let outcome = machine.advance(&Input::single(Token::Pod));
        assert_eq!(outcome, Outcome::new(StatusCode::Ok, MachineState::B));
        assert_eq!(machine.current_state(), outcome.next);
    }
}
