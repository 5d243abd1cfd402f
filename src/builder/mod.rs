//! Construction and validation of automata.
//!
//! This module provides the fail-fast [`build`] function, a fluent
//! [`AutomatonBuilder`], the exhaustive [`diagnose`] check and the
//! [`dfa!`](crate::dfa) macro. Every path into an
//! [`Automaton`](crate::core::Automaton) goes through the same validation.

pub mod automaton;
pub mod diagnose;
pub mod error;
pub mod macros;

pub use automaton::{build, AutomatonBuilder};
pub use diagnose::{diagnose, Diagnosis};
pub use error::{TransitionFault, ValidationError};
