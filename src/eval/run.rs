//! Step-wise execution of an automaton.

use crate::core::{Automaton, RejectReason, Rejection, StateId, Symbol};

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Consumed the symbol at `index` and moved to a new state
    Moved {
        index: usize,
        from: StateId,
        symbol: Symbol,
        to: StateId,
    },

    /// Could not consume the next symbol; the run is over
    Halted(Rejection),
}

/// A run of an automaton over a sequence of symbols.
///
/// Yields one [`Step`] per consumed symbol. After a [`Step::Halted`] the
/// iterator is exhausted, whatever input remains.
///
/// # Example
///
/// ```rust
/// use dfa_trace::dfa;
/// use dfa_trace::eval::Step;
///
/// let automaton = dfa! {
///     states: [Off, On],
///     alphabet: ['t'],
///     start: Off,
///     accepting: [On],
///     transitions: { (Off, 't') => On }
/// }
/// .unwrap();
///
/// let mut run = automaton.run("tt");
/// assert!(matches!(run.next(), Some(Step::Moved { index: 0, .. })));
/// assert!(matches!(run.next(), Some(Step::Halted(_))));
/// assert!(run.next().is_none());
/// assert_eq!(run.current(), "On");
/// ```
pub struct Run<'a, I> {
    automaton: &'a Automaton,
    symbols: I,
    current: &'a StateId,
    index: usize,
    halted: bool,
}

impl<'a, I> Run<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub(crate) fn new(automaton: &'a Automaton, symbols: I) -> Self {
        Self {
            automaton,
            symbols,
            current: automaton.start(),
            index: 0,
            halted: false,
        }
    }

    /// The state the run is currently in.
    pub fn current(&self) -> &'a StateId {
        self.current
    }

    /// Number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Whether the run stopped on a rejection.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn reject(&mut self, symbol: Symbol, reason: RejectReason) -> Step {
        self.halted = true;
        Step::Halted(Rejection {
            index: self.index,
            symbol,
            state: self.current.clone(),
            reason,
        })
    }
}

impl<'a, I> Iterator for Run<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.halted {
            return None;
        }

        let automaton = self.automaton;
        let raw = self.symbols.next()?;
        let symbol = Symbol::from(raw.as_ref());

        if !automaton.is_valid_symbol(symbol.as_str()) {
            return Some(self.reject(symbol, RejectReason::UnknownSymbol));
        }

        let Some(to) = automaton.next(self.current.name(), symbol.as_str()) else {
            return Some(self.reject(symbol, RejectReason::MissingTransition));
        };

        let step = Step::Moved {
            index: self.index,
            from: self.current.clone(),
            symbol,
            to: to.clone(),
        };
        self.current = to;
        self.index += 1;
        Some(step)
    }
}

impl<'a, I> std::iter::FusedIterator for Run<'a, I>
where
    I: std::iter::FusedIterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial() -> Automaton {
        crate::dfa! {
            states: [S, T],
            alphabet: ['a', 'b'],
            start: S,
            accepting: [T],
            transitions: {
                (S, 'a') => T,
                (T, 'a') => T,
            }
        }
        .unwrap()
    }

    #[test]
    fn moves_until_input_ends() {
        let automaton = partial();
        let steps: Vec<Step> = automaton.run("aa").collect();

        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[0],
            Step::Moved {
                index: 0,
                from: StateId::from("S"),
                symbol: Symbol::from('a'),
                to: StateId::from("T"),
            }
        );
    }

    #[test]
    fn missing_transition_halts() {
        let automaton = partial();
        let mut run = automaton.run("ab");

        assert!(matches!(run.next(), Some(Step::Moved { .. })));
        match run.next() {
            Some(Step::Halted(rejection)) => {
                assert_eq!(rejection.index, 1);
                assert_eq!(rejection.reason, RejectReason::MissingTransition);
                assert_eq!(rejection.state, "T");
            }
            other => panic!("Expected Halted, got {other:?}"),
        }
        assert!(run.is_halted());
        assert_eq!(run.consumed(), 1);
    }

    #[test]
    fn unknown_symbol_halts_and_fuses() {
        let automaton = partial();
        let mut run = automaton.run("zaaa");

        match run.next() {
            Some(Step::Halted(rejection)) => {
                assert_eq!(rejection.index, 0);
                assert_eq!(rejection.symbol, "z");
                assert_eq!(rejection.reason, RejectReason::UnknownSymbol);
            }
            other => panic!("Expected Halted, got {other:?}"),
        }
        assert!(run.next().is_none());
        assert!(run.next().is_none());
        assert_eq!(run.current(), "S");
    }

    #[test]
    fn token_symbols_are_supported() {
        let automaton = crate::dfa! {
            states: [Idle, Busy],
            alphabet: ["start", "stop"],
            start: Idle,
            accepting: [Idle],
            transitions: {
                (Idle, "start") => Busy,
                (Busy, "stop") => Idle,
            }
        }
        .unwrap();

        let steps: Vec<Step> = automaton.run_symbols(["start", "stop"]).collect();
        assert_eq!(steps.len(), 2);
    }
}
