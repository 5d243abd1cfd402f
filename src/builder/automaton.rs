//! Builder for constructing automata.

use crate::builder::error::{TransitionFault, ValidationError};
use crate::core::{Automaton, StateId, Symbol, TransitionTable};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Builder for constructing automata with a fluent API.
///
/// Nothing is checked until [`build`](Self::build), which validates the
/// whole specification in a fixed order and reports the first violation.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["A", "B", "C"])
///     .alphabet(['0', '1'])
///     .start("A")
///     .accept("C")
///     .transition("A", '0', "B")
///     .transition("A", '1', "A")
///     .transition("B", '0', "B")
///     .transition("B", '1', "C")
///     .transition("C", '0', "B")
///     .transition("C", '1', "A")
///     .build()
///     .unwrap();
///
/// assert!(automaton.is_total());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<StateId>,
    alphabet: BTreeSet<Symbol>,
    start: Option<StateId>,
    accepting: BTreeSet<StateId>,
    transitions: Vec<(StateId, Symbol, StateId)>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare several states at once. Duplicates collapse.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a symbol to the alphabet.
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.alphabet.insert(symbol.into());
        self
    }

    /// Add several symbols to the alphabet. Duplicates collapse.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: impl Into<StateId>) -> Self {
        self.accepting.insert(state.into());
        self
    }

    /// Mark several states as accepting.
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add the transition `from --symbol--> to`.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions.push((from.into(), symbol.into(), to.into()));
        self
    }

    /// Add several `(from, symbol, to)` transitions at once.
    pub fn transitions<I, F, Y, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (F, Y, T)>,
        F: Into<StateId>,
        Y: Into<Symbol>,
        T: Into<StateId>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(from, symbol, to)| (from.into(), symbol.into(), to.into())),
        );
        self
    }

    /// Every violation in the current specification, in validation order.
    ///
    /// The iterator is lazy, so taking only the first element does only
    /// as much checking as needed to find it.
    pub(crate) fn violations(&self) -> impl Iterator<Item = ValidationError> + '_ {
        let empty_states = self
            .states
            .is_empty()
            .then_some(ValidationError::EmptyStateSet);
        let empty_alphabet = self
            .alphabet
            .is_empty()
            .then_some(ValidationError::EmptyAlphabet);
        let bad_start = match &self.start {
            None => Some(ValidationError::MissingStartState),
            Some(start) if !self.states.contains(start) => {
                Some(ValidationError::UnknownStartState(start.clone()))
            }
            Some(_) => None,
        };
        let bad_accepting = self
            .accepting
            .iter()
            .filter(move |state| !self.states.contains(*state))
            .map(|state| ValidationError::UnknownAcceptingState(state.clone()));
        let bad_keys = self.transitions.iter().filter_map(move |(from, symbol, _)| {
            let fault = if !self.states.contains(from) {
                TransitionFault::UnknownSource
            } else if !self.alphabet.contains(symbol) {
                TransitionFault::UnknownSymbol
            } else {
                return None;
            };
            Some(malformed(from, symbol, fault))
        });
        let bad_targets = self
            .transitions
            .iter()
            .filter(move |(_, _, to)| !self.states.contains(to))
            .map(|(from, symbol, to)| {
                malformed(from, symbol, TransitionFault::UnknownTarget(to.clone()))
            });
        let conflicts = std::iter::once(self).flat_map(Self::conflicts);

        empty_states
            .into_iter()
            .chain(empty_alphabet)
            .chain(bad_start)
            .chain(bad_accepting)
            .chain(bad_keys)
            .chain(bad_targets)
            .chain(conflicts)
    }

    /// Pairs of transitions that share a key but disagree on the target.
    fn conflicts(&self) -> Vec<ValidationError> {
        let mut seen: BTreeMap<(&StateId, &Symbol), &StateId> = BTreeMap::new();
        let mut conflicts = Vec::new();
        for (from, symbol, to) in &self.transitions {
            match seen.get(&(from, symbol)) {
                Some(existing) if *existing != to => conflicts.push(malformed(
                    from,
                    symbol,
                    TransitionFault::Conflict {
                        existing: (*existing).clone(),
                        requested: to.clone(),
                    },
                )),
                Some(_) => {}
                None => {
                    seen.insert((from, symbol), to);
                }
            }
        }
        conflicts
    }

    /// Build the automaton.
    /// Returns the first violation found if the specification is invalid.
    pub fn build(self) -> Result<Automaton, ValidationError> {
        if let Some(err) = self.violations().next() {
            debug!(code = err.code(), error = %err, "rejected automaton specification");
            return Err(err);
        }

        let Some(start) = self.start else {
            return Err(ValidationError::MissingStartState);
        };

        let mut table = TransitionTable::new();
        for (from, symbol, to) in self.transitions {
            table.entry(from).or_default().insert(symbol, to);
        }

        let automaton =
            Automaton::from_parts(self.states, self.alphabet, start, self.accepting, table);
        trace!(
            states = automaton.states().len(),
            symbols = automaton.alphabet().len(),
            transitions = automaton.transition_count(),
            "built automaton"
        );
        Ok(automaton)
    }
}

fn malformed(state: &StateId, symbol: &Symbol, fault: TransitionFault) -> ValidationError {
    ValidationError::MalformedTransition {
        state: state.clone(),
        symbol: symbol.clone(),
        fault,
    }
}

/// Build an automaton from its five defining parts.
///
/// `transitions` is a sequence of `(from, symbol, to)` triples. Validation
/// is fail-fast and checks, in order: empty state set, empty alphabet,
/// start state, accepting states, transition keys, transition targets and
/// finally conflicting duplicate keys.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::{build, ValidationError};
///
/// let result = build(["A", "B"], ["0"], "Z", ["B"], [("A", "0", "B")]);
/// assert!(matches!(result, Err(ValidationError::UnknownStartState(_))));
/// ```
pub fn build<S, A, F, I, K, Y, T>(
    states: S,
    alphabet: A,
    start: impl Into<StateId>,
    accepting: F,
    transitions: I,
) -> Result<Automaton, ValidationError>
where
    S: IntoIterator,
    S::Item: Into<StateId>,
    A: IntoIterator,
    A::Item: Into<Symbol>,
    F: IntoIterator,
    F::Item: Into<StateId>,
    I: IntoIterator<Item = (K, Y, T)>,
    K: Into<StateId>,
    Y: Into<Symbol>,
    T: Into<StateId>,
{
    AutomatonBuilder::new()
        .states(states)
        .alphabet(alphabet)
        .start(start)
        .accepting(accepting)
        .transitions(transitions)
        .build()
}
