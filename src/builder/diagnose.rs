//! Exhaustive validation of automaton specifications.
//!
//! [`build`](crate::builder::build) stops at the first problem. Authoring
//! tools usually want to show everything that is wrong at once, so
//! `diagnose` runs the same rules and accumulates every violation with
//! Stillwater's `Validation`.

use crate::builder::automaton::AutomatonBuilder;
use crate::builder::error::ValidationError;
use crate::definition::AutomatonSpec;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of [`diagnose`]: success, or every violation in validation order.
pub type Diagnosis = Validation<(), NonEmptyVec<ValidationError>>;

impl AutomatonBuilder {
    /// Check the specification without building it, accumulating ALL violations.
    ///
    /// The first reported violation is always the one [`build`](Self::build)
    /// would fail with.
    pub fn diagnose(&self) -> Diagnosis {
        let checks: Vec<Diagnosis> = self
            .violations()
            .map(|err| Validation::fail(err))
            .collect();

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Check an automaton specification, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use dfa_trace::builder::diagnose;
/// use dfa_trace::definition::{AutomatonSpec, TransitionSpec};
/// use stillwater::validation::Validation;
///
/// let spec = AutomatonSpec {
///     states: vec!["A".into()],
///     alphabet: vec!["0".into()],
///     start: "Z".into(),
///     accepting: vec!["Y".into()],
///     transitions: vec![TransitionSpec::new("A", "2", "A")],
/// };
///
/// match diagnose(&spec) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn diagnose(spec: &AutomatonSpec) -> Diagnosis {
    AutomatonBuilder::from(spec).diagnose()
}
