//! Core automaton types.
//!
//! This module contains the pure data model:
//! - State identifiers and input symbols
//! - The validated, immutable `Automaton`
//! - Evaluation traces
//!
//! Nothing in this module performs I/O or holds mutable state.

mod automaton;
mod state;
mod trace;

pub(crate) use automaton::TransitionTable;
pub use automaton::Automaton;
pub use state::{StateId, Symbol};
pub use trace::{MalformedTrace, RejectReason, Rejection, Trace};
