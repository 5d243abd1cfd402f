//! Evaluation traces.
//!
//! A trace is the immutable record of one run of an automaton over an
//! input: the states visited in order, the symbols consumed between them,
//! and the verdict.

use super::state::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an evaluation stopped before consuming its whole input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The symbol is not part of the automaton's alphabet.
    UnknownSymbol,
    /// The symbol is in the alphabet but the current state has no edge for it.
    MissingTransition,
}

/// Early halt of an evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Index of the offending symbol in the input
    pub index: usize,
    /// The symbol that could not be consumed
    pub symbol: Symbol,
    /// The state the automaton was in when it halted
    pub state: StateId,
    pub reason: RejectReason,
}

/// Ordered record of the states visited while evaluating an input.
///
/// `visited` always starts with the start state and grows by one entry per
/// consumed symbol. A trace that halted early is never accepted, whatever
/// state it stopped in.
///
/// # Example
///
/// ```rust
/// use dfa_trace::{dfa, eval::evaluate};
///
/// let automaton = dfa! {
///     states: [Even, Odd],
///     alphabet: ['1'],
///     start: Even,
///     accepting: [Even],
///     transitions: {
///         (Even, '1') => Odd,
///         (Odd, '1') => Even,
///     }
/// }
/// .unwrap();
///
/// let trace = evaluate(&automaton, "11");
/// assert!(trace.is_accepted());
/// assert_eq!(trace.path(), vec!["Even", "Odd", "Even"]);
/// assert_eq!(trace.steps().count(), 2);
///
/// let trace = evaluate(&automaton, "1x1");
/// assert!(!trace.is_accepted());
/// assert_eq!(trace.rejected_at(), Some(1));
/// assert_eq!(trace.path(), vec!["Even", "Odd"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrace")]
pub struct Trace {
    #[serde(skip_serializing)]
    start: StateId,
    visited: Vec<StateId>,
    consumed: Vec<Symbol>,
    accepted: bool,
    rejection: Option<Rejection>,
}

/// A stored trace that contradicts itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTrace {
    #[error("trace has no visited states")]
    EmptyPath,

    #[error("trace visits {visited} states but consumes {consumed} symbols")]
    LengthMismatch { visited: usize, consumed: usize },

    #[error("trace halted at symbol {index} after consuming {consumed} symbols")]
    RejectionOutOfPlace { index: usize, consumed: usize },

    #[error("trace halted early but is marked accepted")]
    AcceptedAfterRejection,
}

/// Wire shape of a [`Trace`], checked before it becomes one.
#[derive(Deserialize)]
struct RawTrace {
    visited: Vec<StateId>,
    consumed: Vec<Symbol>,
    accepted: bool,
    rejection: Option<Rejection>,
}

impl TryFrom<RawTrace> for Trace {
    type Error = MalformedTrace;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        let start = raw.visited.first().cloned().ok_or(MalformedTrace::EmptyPath)?;
        if raw.visited.len() != raw.consumed.len() + 1 {
            return Err(MalformedTrace::LengthMismatch {
                visited: raw.visited.len(),
                consumed: raw.consumed.len(),
            });
        }
        if let Some(rejection) = &raw.rejection {
            if rejection.index != raw.consumed.len() {
                return Err(MalformedTrace::RejectionOutOfPlace {
                    index: rejection.index,
                    consumed: raw.consumed.len(),
                });
            }
            if raw.accepted {
                return Err(MalformedTrace::AcceptedAfterRejection);
            }
        }

        Ok(Self {
            start,
            visited: raw.visited,
            consumed: raw.consumed,
            accepted: raw.accepted,
            rejection: raw.rejection,
        })
    }
}

impl Trace {
    /// Start a trace in `start` with nothing consumed yet.
    pub(crate) fn begin(start: StateId) -> Self {
        Self {
            start: start.clone(),
            visited: vec![start],
            consumed: Vec::new(),
            accepted: false,
            rejection: None,
        }
    }

    /// Record one consumed symbol and the state it led to.
    pub(crate) fn push(&mut self, symbol: Symbol, to: StateId) {
        self.consumed.push(symbol);
        self.visited.push(to);
    }

    /// Close the trace after the whole input was consumed.
    pub(crate) fn finish(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// Close the trace after an early halt.
    pub(crate) fn halt(mut self, rejection: Rejection) -> Self {
        self.accepted = false;
        self.rejection = Some(rejection);
        self
    }

    /// States visited, starting with the start state.
    pub fn visited(&self) -> &[StateId] {
        &self.visited
    }

    /// Names of the visited states, in order.
    pub fn path(&self) -> Vec<&str> {
        self.visited.iter().map(StateId::name).collect()
    }

    /// Symbols that were successfully consumed.
    pub fn consumed(&self) -> &[Symbol] {
        &self.consumed
    }

    /// Whether the whole input was consumed and ended in an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Index of the input symbol where evaluation halted, if it halted early.
    pub fn rejected_at(&self) -> Option<usize> {
        self.rejection.as_ref().map(|r| r.index)
    }

    /// Details of the early halt, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// The state evaluation stopped in.
    pub fn final_state(&self) -> &StateId {
        self.visited.last().unwrap_or(&self.start)
    }

    /// Each traversed edge as `(from, symbol, to)`, in order.
    pub fn steps(&self) -> impl Iterator<Item = (&StateId, &Symbol, &StateId)> + '_ {
        self.visited
            .windows(2)
            .zip(&self.consumed)
            .map(|(pair, symbol)| (&pair[0], symbol, &pair[1]))
    }
}
