//! DOT Rendering
//!
//! This example prints the Graphviz source for the sample automaton, with
//! the path of one input highlighted. Pipe the output into `dot -Tsvg` or
//! any other Graphviz renderer.
//!
//! Run with: cargo run --example render_dot -- [input]

use dfa_trace::dfa;
use dfa_trace::eval::evaluate;
use dfa_trace::render::{to_dot, to_dot_with_trace, DotOptions};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample = dfa! {
        states: [A, B, C],
        alphabet: ['0', '1'],
        start: A,
        accepting: [C],
        transitions: {
            (A, '0') => B,
            (A, '1') => A,
            (B, '0') => B,
            (B, '1') => C,
            (C, '0') => B,
            (C, '1') => A,
        }
    }?;

    let options = DotOptions::default();
    match env::args().nth(1) {
        Some(input) => {
            let trace = evaluate(&sample, &input);
            println!("{}", to_dot_with_trace(&sample, &trace, &options));
        }
        None => println!("{}", to_dot(&sample, &options)),
    }

    Ok(())
}
