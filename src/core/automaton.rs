//! The validated, immutable deterministic finite automaton.

use super::state::{StateId, Symbol};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Transition table: source state -> (symbol -> target state).
pub(crate) type TransitionTable = BTreeMap<StateId, BTreeMap<Symbol, StateId>>;

static NO_TRANSITIONS: BTreeMap<Symbol, StateId> = BTreeMap::new();

/// A deterministic finite automaton.
///
/// An `Automaton` can only be obtained through [`build`](crate::builder::build),
/// [`AutomatonBuilder`](crate::builder::AutomatonBuilder), the
/// [`dfa!`](crate::dfa) macro or a [`Definition`](crate::definition::Definition),
/// all of which validate it first. It is immutable afterwards and can be
/// shared freely between threads.
///
/// The transition function may be partial. A missing `(state, symbol)`
/// entry means the input is rejected at that point.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::build;
///
/// let automaton = build(
///     ["A", "B"],
///     ["x"],
///     "A",
///     ["B"],
///     [("A", "x", "B")],
/// )
/// .unwrap();
///
/// assert_eq!(automaton.start(), "A");
/// assert!(automaton.is_accepting("B"));
/// assert_eq!(automaton.next("A", "x").map(|s| s.name()), Some("B"));
/// assert!(!automaton.is_total());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Automaton {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    start: StateId,
    accepting: BTreeSet<StateId>,
    transitions: TransitionTable,
}

impl Automaton {
    /// Assemble an automaton from parts that have already been validated.
    pub(crate) fn from_parts(
        states: BTreeSet<StateId>,
        alphabet: BTreeSet<Symbol>,
        start: StateId,
        accepting: BTreeSet<StateId>,
        transitions: TransitionTable,
    ) -> Self {
        Self {
            states,
            alphabet,
            start,
            accepting,
            transitions,
        }
    }

    /// All states, in sorted order.
    pub fn states(&self) -> &BTreeSet<StateId> {
        &self.states
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// The state every evaluation begins in.
    pub fn start(&self) -> &StateId {
        &self.start
    }

    /// States that accept when the input ends in them.
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Outgoing edges of `state`, keyed by symbol.
    ///
    /// States without outgoing edges, and names that are not states of this
    /// automaton, yield an empty map.
    pub fn transitions_from(&self, state: &str) -> &BTreeMap<Symbol, StateId> {
        self.transitions.get(state).unwrap_or(&NO_TRANSITIONS)
    }

    /// Target of the transition `(state, symbol)`, if one is defined.
    pub fn next(&self, state: &str, symbol: &str) -> Option<&StateId> {
        self.transitions.get(state)?.get(symbol)
    }

    /// Check whether `state` is accepting. Unknown names are not.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.contains(state)
    }

    /// Check whether `symbol` belongs to the alphabet.
    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Check whether `state` is one of this automaton's states.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Iterate over every edge as `(from, symbol, to)`, ordered by source
    /// state then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, &Symbol, &StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(symbol, to)| (from, symbol, to)))
    }

    /// Number of defined transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// Check whether every `(state, symbol)` pair has a transition.
    pub fn is_total(&self) -> bool {
        self.transition_count() == self.states.len() * self.alphabet.len()
    }

    /// All `(state, symbol)` pairs that have no transition.
    pub fn missing_transitions(&self) -> Vec<(&StateId, &Symbol)> {
        let alphabet = &self.alphabet;
        self.states
            .iter()
            .flat_map(move |state| {
                let edges = self.transitions_from(state.name());
                alphabet
                    .iter()
                    .filter(move |symbol| !edges.contains_key(symbol.as_str()))
                    .map(move |symbol| (state, symbol))
            })
            .collect()
    }
}
