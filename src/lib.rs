//! dfa-trace: validated deterministic finite automata with traced acceptance
//!
//! An [`Automaton`] is built once from its five defining parts (states,
//! alphabet, start state, accepting states and a possibly partial
//! transition function), validated, and immutable from then on. Any number
//! of inputs can then be evaluated against it; each evaluation returns a
//! [`Trace`] with the visited states and the verdict, ready for a rendering
//! layer to animate.
//!
//! # Core Concepts
//!
//! - **Automaton**: validated, immutable DFA (`core`)
//! - **Construction**: fail-fast `build`, fluent builder, exhaustive `diagnose`, `dfa!` (`builder`)
//! - **Evaluation**: pure, never-failing acceptance check with a full trace (`eval`)
//! - **Definitions**: versioned JSON/binary documents (`definition`)
//! - **Rendering**: Graphviz DOT export (`render`)
//!
//! # Example
//!
//! ```rust
//! use dfa_trace::builder::build;
//! use dfa_trace::eval::evaluate;
//!
//! let sample = build(
//!     ["A", "B", "C"],
//!     ["0", "1"],
//!     "A",
//!     ["C"],
//!     [
//!         ("A", "0", "B"),
//!         ("A", "1", "A"),
//!         ("B", "0", "B"),
//!         ("B", "1", "C"),
//!         ("C", "0", "B"),
//!         ("C", "1", "A"),
//!     ],
//! )
//! .unwrap();
//!
//! let trace = evaluate(&sample, "11");
//! assert_eq!(trace.path(), vec!["A", "A", "A"]);
//! assert!(!trace.is_accepted());
//!
//! let trace = evaluate(&sample, "01");
//! assert_eq!(trace.path(), vec!["A", "B", "C"]);
//! assert!(trace.is_accepted());
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod eval;
pub mod render;

// Re-export commonly used types
pub use builder::{build, diagnose, AutomatonBuilder, ValidationError};
pub use core::{Automaton, MalformedTrace, RejectReason, Rejection, StateId, Symbol, Trace};
pub use definition::{AutomatonSpec, Definition, DefinitionError};
pub use eval::{evaluate, evaluate_symbols};
