//! Graphviz DOT export.
//!
//! Produces the textual `digraph` description of an automaton for an
//! external renderer. Accepting states are drawn as double circles, every
//! other state as a circle, and each transition becomes one edge labelled
//! with its symbol. A [`Trace`] can be overlaid to highlight the states and
//! edges an evaluation went through.

use crate::core::{Automaton, StateId, Symbol, Trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rendering options for DOT export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotOptions {
    /// Graphviz layout engine, emitted as the `layout` graph attribute
    pub engine: Option<String>,
    /// Graph direction, e.g. `LR` or `TB`
    pub rankdir: String,
    /// Colour used for states and edges visited by a trace
    pub highlight_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            engine: Some("neato".to_string()),
            rankdir: "LR".to_string(),
            highlight_color: "red".to_string(),
        }
    }
}

/// Render `automaton` as a DOT `digraph`.
///
/// # Example
///
/// ```rust
/// use dfa_trace::dfa;
/// use dfa_trace::render::{to_dot, DotOptions};
///
/// let automaton = dfa! {
///     states: [A, B],
///     alphabet: ['x'],
///     start: A,
///     accepting: [B],
///     transitions: { (A, 'x') => B }
/// }
/// .unwrap();
///
/// let dot = to_dot(&automaton, &DotOptions::default());
/// assert!(dot.starts_with("digraph {"));
/// assert!(dot.contains("\"B\" [shape=doublecircle]"));
/// assert!(dot.contains("\"A\" -> \"B\" [label=\"x\"]"));
/// ```
pub fn to_dot(automaton: &Automaton, options: &DotOptions) -> String {
    Dot {
        automaton,
        trace: None,
        options,
    }
    .to_string()
}

/// Render `automaton` with the states and edges of `trace` highlighted.
///
/// The final state is drawn bold when the trace was accepted.
pub fn to_dot_with_trace(automaton: &Automaton, trace: &Trace, options: &DotOptions) -> String {
    Dot {
        automaton,
        trace: Some(trace),
        options,
    }
    .to_string()
}

struct Dot<'a> {
    automaton: &'a Automaton,
    trace: Option<&'a Trace>,
    options: &'a DotOptions,
}

impl Dot<'_> {
    /// Name for the invisible entry node, distinct from every state.
    fn entry_node(&self) -> String {
        let mut name = String::from("__start");
        while self.automaton.contains_state(&name) {
            name.push('_');
        }
        name
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visited: BTreeSet<&StateId> = self
            .trace
            .map(|t| t.visited().iter().collect())
            .unwrap_or_default();
        let traversed: BTreeSet<(&StateId, &Symbol)> = self
            .trace
            .map(|t| t.steps().map(|(from, symbol, _)| (from, symbol)).collect())
            .unwrap_or_default();
        let accepted_end = self
            .trace
            .filter(|t| t.is_accepted())
            .map(|t| t.final_state());
        let color = Quoted(&self.options.highlight_color);

        writeln!(f, "digraph {{")?;
        write!(f, "    graph [rankdir={}", Quoted(&self.options.rankdir))?;
        if let Some(engine) = &self.options.engine {
            write!(f, " layout={}", Quoted(engine))?;
        }
        writeln!(f, "]")?;

        let entry = self.entry_node();
        writeln!(f, "    {} [shape=none label=\"\"]", Quoted(&entry))?;
        writeln!(
            f,
            "    {} -> {}",
            Quoted(&entry),
            Quoted(self.automaton.start().name())
        )?;

        for state in self.automaton.states() {
            let shape = if self.automaton.is_accepting(state.name()) {
                "doublecircle"
            } else {
                "circle"
            };
            write!(f, "    {} [shape={shape}", Quoted(state.name()))?;
            if visited.contains(state) {
                write!(f, " color={color} fontcolor={color}")?;
            }
            if accepted_end == Some(state) {
                write!(f, " style=bold")?;
            }
            writeln!(f, "]")?;
        }

        for (from, symbol, to) in self.automaton.transitions() {
            write!(
                f,
                "    {} -> {} [label={}",
                Quoted(from.name()),
                Quoted(to.name()),
                Quoted(symbol.as_str())
            )?;
            if traversed.contains(&(from, symbol)) {
                write!(f, " color={color} fontcolor={color}")?;
            }
            writeln!(f, "]")?;
        }

        write!(f, "}}")
    }
}

/// A DOT double-quoted string.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}
