//! Validation errors raised while building an automaton.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// What is wrong with a single transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionFault {
    #[error("source state is not one of the automaton's states")]
    UnknownSource,

    #[error("symbol is not part of the alphabet")]
    UnknownSymbol,

    #[error("target state '{0}' is not one of the automaton's states")]
    UnknownTarget(StateId),

    #[error("already leads to '{existing}', cannot also lead to '{requested}'")]
    Conflict {
        existing: StateId,
        requested: StateId,
    },
}

/// Errors that can occur when building an automaton.
///
/// Building is fail-fast: only the first violation is reported, checked in
/// the order the variants are listed here. Use
/// [`diagnose`](crate::builder::diagnose) to collect all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Automaton has no states")]
    EmptyStateSet,

    #[error("Automaton alphabet is empty")]
    EmptyAlphabet,

    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Start state '{0}' is not one of the automaton's states")]
    UnknownStartState(StateId),

    #[error("Accepting state '{0}' is not one of the automaton's states")]
    UnknownAcceptingState(StateId),

    #[error("Malformed transition ({state}, {symbol}): {fault}")]
    MalformedTransition {
        state: StateId,
        symbol: Symbol,
        fault: TransitionFault,
    },
}

impl ValidationError {
    /// Stable identifying code for presenting the error to an end user.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyStateSet => "EmptyStateSet",
            Self::EmptyAlphabet => "EmptyAlphabet",
            Self::MissingStartState => "MissingStartState",
            Self::UnknownStartState(_) => "UnknownStartState",
            Self::UnknownAcceptingState(_) => "UnknownAcceptingState",
            Self::MalformedTransition { .. } => "MalformedTransition",
        }
    }
}
