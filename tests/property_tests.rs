//! Property-based tests for the coffee machine automaton.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and inputs.

use coffee_fsm::core::{
    CleanPolicy, CoffeeMachine, Input, MachineState, Outcome, StatusCode, Token,
};
use coffee_fsm::MachineBuilder;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_token()(variant in 0..4usize) -> Token {
        Token::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..7usize) -> MachineState {
        MachineState::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_policy()(reject in any::<bool>()) -> CleanPolicy {
        if reject { CleanPolicy::Reject } else { CleanPolicy::Reset }
    }
}

prop_compose! {
    fn ingredient_batch()(tokens in prop::collection::vec(prop::bool::ANY, 1..6)) -> Input {
        Input::batch(tokens.into_iter().map(|water| if water { Token::Water } else { Token::Pod }))
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        arbitrary_token().prop_map(Input::Single),
        prop::collection::vec(arbitrary_token(), 0..6).prop_map(Input::Batch),
        ingredient_batch(),
    ]
}

proptest! {
    #[test]
    fn process_is_deterministic(
        state in arbitrary_state(),
        input in arbitrary_input(),
        policy in arbitrary_policy(),
    ) {
        let first = state.process_with(&input, policy);
        let second = state.process_with(&input, policy);
        prop_assert_eq!(first, second);
        prop_assert!(first.status.code() <= 2);
    }

    #[test]
    fn trap_state_absorbs_every_input(input in arbitrary_input(), policy in arbitrary_policy()) {
        let outcome = MachineState::F.process_with(&input, policy);
        prop_assert_eq!(outcome, Outcome::new(StatusCode::Error, MachineState::F));
    }

    #[test]
    fn errors_lead_to_trap_under_reset_policy(
        state in arbitrary_state(),
        input in arbitrary_input(),
    ) {
        let outcome = state.process_with(&input, CleanPolicy::Reset);
        prop_assert_eq!(outcome.status == StatusCode::Error, outcome.next == MachineState::F);
    }

    #[test]
    fn batches_follow_the_all_elements_rule(
        state in arbitrary_state(),
        tokens in prop::collection::vec(arbitrary_token(), 0..6),
    ) {
        let input = Input::Batch(tokens.clone());
        let valid = !tokens.is_empty() && tokens.iter().all(Token::is_ingredient);
        let outcome = state.process(&input);

        if valid && state.is_loaded() {
            prop_assert_eq!(outcome, Outcome::new(StatusCode::Ok, state));
        } else {
            prop_assert_eq!(outcome, Outcome::new(StatusCode::Error, MachineState::F));
        }
    }

    #[test]
    fn validation_agrees_with_predicate(input in arbitrary_input()) {
        prop_assert_eq!(input.validate_batch().is_success(), input.is_valid_batch());
    }

    #[test]
    fn coffee_is_produced_after_any_number_of_batches(
        water_first in any::<bool>(),
        batches in prop::collection::vec(ingredient_batch(), 0..8),
    ) {
        let mut machine = CoffeeMachine::new();
        let (first, second, loaded) = if water_first {
            (Token::Water, Token::Pod, MachineState::DPrime)
        } else {
            (Token::Pod, Token::Water, MachineState::D)
        };

        machine.transition_token(first);
        machine.transition_token(second);
        prop_assert_eq!(machine.current_state(), loaded);

        for batch in &batches {
            prop_assert_eq!(machine.transition(batch), StatusCode::Ok);
            prop_assert_eq!(machine.current_state(), loaded);
        }

        prop_assert_eq!(machine.transition_token(Token::Button), StatusCode::CoffeeProduced);
        prop_assert_eq!(machine.current_state(), MachineState::E);
    }

    #[test]
    fn e_accepts_only_clean(input in arbitrary_input()) {
        let outcome = MachineState::E.process(&input);
        if input == Input::Single(Token::Clean) {
            prop_assert_eq!(outcome, Outcome::new(StatusCode::Ok, MachineState::A));
        } else {
            prop_assert_eq!(outcome, Outcome::new(StatusCode::Error, MachineState::F));
        }
    }

    #[test]
    fn machine_commits_what_the_state_returns(
        initial in arbitrary_state(),
        policy in arbitrary_policy(),
        inputs in prop::collection::vec(arbitrary_input(), 0..20),
    ) {
        let mut machine = MachineBuilder::new()
            .initial(initial)
            .clean_policy(policy)
            .build();

        for input in &inputs {
            let before = machine.current_state();
            let expected = before.process_with(input, policy);
            let status = machine.transition(input);

            prop_assert_eq!(status, expected.status);
            prop_assert_eq!(machine.current_state(), expected.next);
            prop_assert_eq!(machine.current_state_name(), expected.next.name());
        }
    }

    #[test]
    fn policies_differ_only_on_clean_while_loaded(
        state in arbitrary_state(),
        input in arbitrary_input(),
    ) {
        let reset = state.process_with(&input, CleanPolicy::Reset);
        let reject = state.process_with(&input, CleanPolicy::Reject);

        if state.is_loaded() && input == Input::Single(Token::Clean) {
            prop_assert_ne!(reset, reject);
        } else {
            prop_assert_eq!(reset, reject);
        }
    }

    #[test]
    fn status_serializes_as_its_code(state in arbitrary_state(), input in arbitrary_input()) {
        let status = state.process(&input).status;
        let json = serde_json::to_string(&status).unwrap();
        prop_assert_eq!(json, status.code().to_string());
    }

    #[test]
    fn state_name_roundtrips(state in arbitrary_state()) {
        let parsed: MachineState = state.name().parse().unwrap();
        prop_assert_eq!(parsed, state);
    }
}
