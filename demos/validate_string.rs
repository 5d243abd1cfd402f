//! String Validation
//!
//! This example loads an automaton definition and checks strings against it,
//! printing every visited state the way a UI would animate them.
//!
//! Key concepts:
//! - Automata come from external definition documents, not hardcoded tables
//! - Evaluation never fails; rejection is a normal outcome
//! - The trace records where and why an input was rejected
//!
//! Run with: cargo run --example validate_string -- [definition.json] [inputs...]

use dfa_trace::definition::Definition;
use dfa_trace::eval::evaluate;
use std::env;
use std::fs;

const DEFAULT_DEFINITION: &str = "fixtures/aba_bab.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_DEFINITION.to_string());
    let mut inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        inputs = vec!["abababa".into(), "ababab".into(), "aab".into(), "abaXbab".into()];
    }

    println!("=== String Validation Example ===\n");

    let definition = Definition::from_json(&fs::read_to_string(&path)?)?;
    let automaton = definition.build()?;

    println!("Loaded '{}' from {}", definition.name, path);
    if let Some(description) = &definition.description {
        println!("Language: {description}");
    }
    println!(
        "{} states, {} symbols, {} transitions\n",
        automaton.states().len(),
        automaton.alphabet().len(),
        automaton.transition_count()
    );

    for input in &inputs {
        let trace = evaluate(&automaton, input);
        println!("Input {input:?}");
        println!("  path: {}", trace.path().join(" -> "));
        match trace.rejection() {
            Some(rejection) => println!(
                "  rejected at index {} (symbol {:?} in state {}): {:?}",
                rejection.index, rejection.symbol.as_str(), rejection.state, rejection.reason
            ),
            None if trace.is_accepted() => println!("  accepted"),
            None => println!("  rejected: {} is not accepting", trace.final_state()),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
