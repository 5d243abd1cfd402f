//! Property-based tests for automaton construction and evaluation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use dfa_trace::builder::{build, diagnose, ValidationError};
use dfa_trace::definition::{AutomatonSpec, TransitionSpec};
use dfa_trace::{evaluate, Automaton};
use proptest::prelude::*;
use stillwater::validation::Validation;

const STATES: [&str; 4] = ["s0", "s1", "s2", "s3"];
const ALPHABET: [&str; 2] = ["a", "b"];

prop_compose! {
    /// A valid automaton over `STATES` x `ALPHABET`; each pair has an edge
    /// with probability 3/4 so partial tables are exercised too.
    fn arbitrary_automaton()(
        targets in prop::collection::vec(prop::option::weighted(0.75, 0..4usize), 8),
        accepting in prop::collection::vec(any::<bool>(), 4),
        start in 0..4usize,
    ) -> Automaton {
        let transitions: Vec<(&str, &str, &str)> = targets
            .iter()
            .enumerate()
            .filter_map(|(i, target)| {
                target.map(|t| (STATES[i / 2], ALPHABET[i % 2], STATES[t]))
            })
            .collect();
        let accepting: Vec<&str> = STATES
            .iter()
            .zip(&accepting)
            .filter(|(_, keep)| **keep)
            .map(|(s, _)| *s)
            .collect();

        build(STATES, ALPHABET, STATES[start], accepting, transitions).unwrap()
    }
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    // Mostly alphabet symbols, occasionally a foreign one.
    prop::collection::vec(prop_oneof![8 => Just('a'), 8 => Just('b'), 1 => Just('z')], 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

prop_compose! {
    /// A specification that may violate any rule.
    fn arbitrary_spec()(
        states in prop::collection::vec(prop_oneof![Just("A"), Just("B")], 0..3),
        alphabet in prop::collection::vec(prop_oneof![Just("0"), Just("1")], 0..3),
        start in prop_oneof![Just("A"), Just("B"), Just("Z")],
        accepting in prop::collection::vec(prop_oneof![Just("A"), Just("B"), Just("Y")], 0..3),
        transitions in prop::collection::vec(
            (
                prop_oneof![Just("A"), Just("B"), Just("Q")],
                prop_oneof![Just("0"), Just("1"), Just("2")],
                prop_oneof![Just("A"), Just("B"), Just("R")],
            ),
            0..5,
        ),
    ) -> AutomatonSpec {
        AutomatonSpec {
            states: states.into_iter().map(Into::into).collect(),
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            start: start.into(),
            accepting: accepting.into_iter().map(Into::into).collect(),
            transitions: transitions
                .into_iter()
                .map(|(from, symbol, to)| TransitionSpec::new(from, symbol, to))
                .collect(),
        }
    }
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(automaton in arbitrary_automaton(), input in arbitrary_input()) {
        let trace1 = evaluate(&automaton, &input);
        let trace2 = evaluate(&automaton, &input);
        prop_assert_eq!(trace1, trace2);
    }

    #[test]
    fn visited_length_is_consumed_plus_one(
        automaton in arbitrary_automaton(),
        input in arbitrary_input(),
    ) {
        let trace = evaluate(&automaton, &input);
        prop_assert_eq!(trace.visited().len(), trace.consumed().len() + 1);
        prop_assert_eq!(trace.visited()[0].name(), automaton.start().name());

        match trace.rejected_at() {
            Some(index) => prop_assert_eq!(index, trace.consumed().len()),
            None => prop_assert_eq!(trace.consumed().len(), input.chars().count()),
        }
    }

    #[test]
    fn acceptance_matches_final_state(
        automaton in arbitrary_automaton(),
        input in arbitrary_input(),
    ) {
        let trace = evaluate(&automaton, &input);
        if trace.rejected_at().is_some() {
            prop_assert!(!trace.is_accepted());
        } else {
            prop_assert_eq!(
                trace.is_accepted(),
                automaton.is_accepting(trace.final_state().name())
            );
        }
        prop_assert_eq!(automaton.accepts(&input), trace.is_accepted());
    }

    #[test]
    fn empty_input_reports_start(automaton in arbitrary_automaton()) {
        let trace = evaluate(&automaton, "");
        prop_assert_eq!(trace.visited().len(), 1);
        prop_assert_eq!(trace.final_state(), automaton.start());
        prop_assert_eq!(trace.is_accepted(), automaton.is_accepting(automaton.start().name()));
    }

    #[test]
    fn prefix_traces_are_prefixes(
        automaton in arbitrary_automaton(),
        input in arbitrary_input(),
        cut in 0..16usize,
    ) {
        let prefix: String = input.chars().take(cut).collect();
        let full = evaluate(&automaton, &input);
        let partial = evaluate(&automaton, &prefix);

        if partial.rejected_at().is_none() {
            prop_assert!(full.visited().starts_with(partial.visited()));
        } else {
            // Rejection inside the prefix is also a rejection of the whole input.
            prop_assert_eq!(partial.rejected_at(), full.rejected_at());
            prop_assert_eq!(partial.visited(), full.visited());
        }
    }

    #[test]
    fn steps_follow_the_transition_table(
        automaton in arbitrary_automaton(),
        input in arbitrary_input(),
    ) {
        let trace = evaluate(&automaton, &input);
        for (from, symbol, to) in trace.steps() {
            prop_assert_eq!(automaton.next(from.name(), symbol.as_str()), Some(to));
        }
    }

    #[test]
    fn construction_is_idempotent(automaton in arbitrary_automaton(), input in arbitrary_input()) {
        let rebuilt = automaton.to_spec().build().unwrap();
        prop_assert_eq!(&rebuilt, &automaton);
        prop_assert_eq!(evaluate(&rebuilt, &input), evaluate(&automaton, &input));
    }

    #[test]
    fn diagnose_agrees_with_build(spec in arbitrary_spec()) {
        let built: Result<Automaton, ValidationError> = spec.build();
        match (built, diagnose(&spec)) {
            (Ok(_), diagnosis) => prop_assert!(diagnosis.is_success()),
            (Err(first), Validation::Failure(errors)) => {
                prop_assert_eq!(errors.iter().next(), Some(&first));
            }
            (Err(first), Validation::Success(_)) => {
                prop_assert!(false, "build failed with {} but diagnose passed", first);
            }
        }
    }

    #[test]
    fn trace_roundtrip_serialization(automaton in arbitrary_automaton(), input in arbitrary_input()) {
        let trace = evaluate(&automaton, &input);
        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: dfa_trace::Trace = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(trace, deserialized);
    }
}
