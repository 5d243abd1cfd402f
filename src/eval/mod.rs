//! Acceptance evaluation.
//!
//! Evaluation is a pure function of an automaton and an input: it never
//! fails and never mutates the automaton. Symbols outside the alphabet and
//! undefined transitions both end the run early with a rejection, as if the
//! automaton had moved into an implicit non-accepting trap state.
//!
//! # Example
//!
//! ```rust
//! use dfa_trace::{dfa, eval::evaluate};
//!
//! let sample = dfa! {
//!     states: [A, B, C],
//!     alphabet: ['0', '1'],
//!     start: A,
//!     accepting: [C],
//!     transitions: {
//!         (A, '0') => B, (A, '1') => A,
//!         (B, '0') => B, (B, '1') => C,
//!         (C, '0') => B, (C, '1') => A,
//!     }
//! }
//! .unwrap();
//!
//! let trace = evaluate(&sample, "01");
//! assert!(trace.is_accepted());
//! assert_eq!(trace.path(), vec!["A", "B", "C"]);
//! ```

mod run;

pub use run::{Run, Step};

use crate::core::{Automaton, Symbol, Trace};
use tracing::{debug, trace};

/// Evaluate `input` one `char` at a time.
///
/// Each character is looked up as a single-character symbol, so
/// multi-character alphabet tokens can never match here; use
/// [`evaluate_symbols`] for those.
pub fn evaluate(automaton: &Automaton, input: &str) -> Trace {
    evaluate_symbols(automaton, input.chars().map(Symbol::from))
}

/// Evaluate an already tokenized input.
pub fn evaluate_symbols<I>(automaton: &Automaton, symbols: I) -> Trace
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trace = Trace::begin(automaton.start().clone());

    for step in automaton.run_symbols(symbols) {
        match step {
            Step::Moved {
                index,
                from,
                symbol,
                to,
            } => {
                trace!(index, %from, %symbol, %to, "consumed symbol");
                trace.push(symbol, to);
            }
            Step::Halted(rejection) => {
                debug!(
                    index = rejection.index,
                    symbol = %rejection.symbol,
                    state = %rejection.state,
                    reason = ?rejection.reason,
                    "input rejected"
                );
                return trace.halt(rejection);
            }
        }
    }

    let accepted = automaton.is_accepting(trace.final_state().name());
    debug!(
        consumed = trace.consumed().len(),
        final_state = %trace.final_state(),
        accepted,
        "input consumed"
    );
    trace.finish(accepted)
}

impl Automaton {
    /// Start a step-wise run over `input`, one `char` per symbol.
    pub fn run<'s>(&self, input: &'s str) -> Run<'_, impl Iterator<Item = Symbol> + 's> {
        Run::new(self, input.chars().map(Symbol::from))
    }

    /// Start a step-wise run over an already tokenized input.
    pub fn run_symbols<I>(&self, symbols: I) -> Run<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Run::new(self, symbols.into_iter())
    }

    /// Evaluate `input`; see [`evaluate`].
    pub fn evaluate(&self, input: &str) -> Trace {
        evaluate(self, input)
    }

    /// Check whether `input` is accepted, without keeping the trace.
    pub fn accepts(&self, input: &str) -> bool {
        let mut run = self.run(input);
        run.by_ref().all(|step| matches!(step, Step::Moved { .. }))
            && self.is_accepting(run.current().name())
    }
}
