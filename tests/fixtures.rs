//! Integration tests against the automata shipped in `fixtures/`.

use dfa_trace::builder::{build, TransitionFault, ValidationError};
use dfa_trace::definition::{Definition, TransitionSpec};
use dfa_trace::render::{to_dot, DotOptions};
use dfa_trace::{evaluate, Automaton, RejectReason};

const SAMPLE: &str = include_str!("../fixtures/sample.json");
const ABA_BAB: &str = include_str!("../fixtures/aba_bab.json");

fn load(json: &str) -> Automaton {
    Definition::from_json(json).unwrap().build().unwrap()
}

#[test]
fn sample_eleven_stays_in_start() {
    let trace = evaluate(&load(SAMPLE), "11");
    assert_eq!(trace.path(), vec!["A", "A", "A"]);
    assert!(!trace.is_accepted());
}

#[test]
fn sample_zero_one_is_accepted() {
    let trace = evaluate(&load(SAMPLE), "01");
    assert_eq!(trace.path(), vec!["A", "B", "C"]);
    assert!(trace.is_accepted());
}

#[test]
fn sample_empty_input() {
    let trace = evaluate(&load(SAMPLE), "");
    assert_eq!(trace.path(), vec!["A"]);
    assert!(!trace.is_accepted());
    assert!(trace.rejected_at().is_none());
}

#[test]
fn sample_alternating_input_visits_seven_states() {
    let trace = evaluate(&load(SAMPLE), "010101");
    assert_eq!(trace.visited().len(), 7);
    assert_eq!(trace.path(), vec!["A", "B", "C", "B", "C", "B", "C"]);
    assert!(trace.is_accepted());
}

#[test]
fn sample_with_unknown_start_fails() {
    let definition = Definition::from_json(SAMPLE).unwrap();
    let mut spec = definition.automaton;
    spec.start = "Z".into();

    assert!(matches!(
        spec.build(),
        Err(ValidationError::UnknownStartState(state)) if state == "Z"
    ));
}

#[test]
fn sample_with_foreign_symbol_transition_fails() {
    let definition = Definition::from_json(SAMPLE).unwrap();
    let mut spec = definition.automaton;
    spec.transitions.push(TransitionSpec::new("A", "2", "B"));

    match spec.build() {
        Err(ValidationError::MalformedTransition {
            state,
            symbol,
            fault,
        }) => {
            assert_eq!(state, "A");
            assert_eq!(symbol, "2");
            assert_eq!(fault, TransitionFault::UnknownSymbol);
        }
        other => panic!("Expected MalformedTransition, got {other:?}"),
    }
}

#[test]
fn sample_fixture_matches_inline_build() {
    let inline = build(
        ["A", "B", "C"],
        ["0", "1"],
        "A",
        ["C"],
        [
            ("A", "0", "B"),
            ("A", "1", "A"),
            ("B", "0", "B"),
            ("B", "1", "C"),
            ("C", "0", "B"),
            ("C", "1", "A"),
        ],
    )
    .unwrap();
    assert_eq!(load(SAMPLE), inline);
}

#[test]
fn aba_bab_fixture_metadata() {
    let definition = Definition::from_json(ABA_BAB).unwrap();
    assert_eq!(definition.name, "aba_bab");
    assert_eq!(
        definition.description.as_deref(),
        Some("(aba+bab) (a+b)* (bab) (a+b)* (a+b+ab+ba) (a+b+aa)*")
    );

    let automaton = definition.build().unwrap();
    assert_eq!(automaton.states().len(), 12);
    assert_eq!(automaton.transition_count(), 22);
    // The trap state has no outgoing edges.
    assert!(!automaton.is_total());
    assert!(automaton.transitions_from("T").is_empty());
}

#[test]
fn aba_bab_accepts_words_in_the_language() {
    let automaton = load(ABA_BAB);

    let trace = evaluate(&automaton, "abababa");
    assert_eq!(
        trace.path(),
        vec!["q1", "q2", "q3", "q6", "q7", "q8", "q9", "q10"]
    );
    assert!(trace.is_accepted());

    assert!(automaton.accepts("babbaba"));
    assert!(automaton.accepts("abababb"));
}

#[test]
fn aba_bab_rejects_words_outside_the_language() {
    let automaton = load(ABA_BAB);

    assert!(!automaton.accepts("ababab"));
    assert!(!automaton.accepts("bababa"));
    assert!(!automaton.accepts("aa"));
}

#[test]
fn aba_bab_trap_state_rejects_on_missing_edge() {
    let trace = evaluate(&load(ABA_BAB), "aab");

    assert_eq!(trace.path(), vec!["q1", "q2", "T"]);
    assert_eq!(trace.rejected_at(), Some(2));
    let rejection = trace.rejection().unwrap();
    assert_eq!(rejection.reason, RejectReason::MissingTransition);
    assert_eq!(rejection.state, "T");
}

#[test]
fn aba_bab_foreign_symbol_rejects() {
    let trace = evaluate(&load(ABA_BAB), "abaXbab");
    assert_eq!(trace.rejected_at(), Some(3));
    assert_eq!(trace.path(), vec!["q1", "q2", "q3", "q6"]);
    assert!(!trace.is_accepted());
}

#[test]
fn fixtures_render_to_dot() {
    let automaton = load(ABA_BAB);
    let dot = to_dot(&automaton, &DotOptions::default());

    assert!(dot.contains("\"q10\" [shape=doublecircle]"));
    assert!(dot.contains("\"q11\" [shape=doublecircle]"));
    assert!(dot.contains("\"T\" [shape=circle]"));
    assert!(dot.contains("\"q9\" -> \"q10\" [label=\"a\"]"));
}

#[test]
fn fixtures_survive_binary_encoding() {
    let definition = Definition::from_json(ABA_BAB).unwrap();
    let bytes = definition.to_bytes().unwrap();
    let decoded = Definition::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.id, definition.id);
    assert_eq!(decoded.build().unwrap(), definition.build().unwrap());
}
