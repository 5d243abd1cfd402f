//! Serializable automaton definitions.
//!
//! This module provides the wire shape of an automaton specification and a
//! versioned document envelope around it, so automata can be supplied from
//! files, generated by other tools, or stored alongside test fixtures.
//! Documents are always validated on the way back into an [`Automaton`].

use crate::builder::{AutomatonBuilder, ValidationError};
use crate::core::{Automaton, StateId, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for definition format
pub const DEFINITION_VERSION: u32 = 1;

/// A single `from --symbol--> to` entry of a specification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl TransitionSpec {
    /// Create a transition entry.
    pub fn new(
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// Unvalidated automaton specification: the five defining parts, as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonSpec {
    pub states: Vec<StateId>,
    pub alphabet: Vec<Symbol>,
    pub start: StateId,
    #[serde(default)]
    pub accepting: Vec<StateId>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}

impl AutomatonSpec {
    /// Validate and build the automaton this specification describes.
    pub fn build(&self) -> Result<Automaton, ValidationError> {
        AutomatonBuilder::from(self).build()
    }

    /// Validate and build, consuming the specification.
    pub fn into_automaton(self) -> Result<Automaton, ValidationError> {
        AutomatonBuilder::from(self).build()
    }
}

impl From<&AutomatonSpec> for AutomatonBuilder {
    fn from(spec: &AutomatonSpec) -> Self {
        AutomatonBuilder::new()
            .states(&spec.states)
            .alphabet(&spec.alphabet)
            .start(&spec.start)
            .accepting(&spec.accepting)
            .transitions(spec.transitions.iter().map(|t| (&t.from, &t.symbol, &t.to)))
    }
}

impl From<AutomatonSpec> for AutomatonBuilder {
    fn from(spec: AutomatonSpec) -> Self {
        AutomatonBuilder::new()
            .states(spec.states)
            .alphabet(spec.alphabet)
            .start(spec.start)
            .accepting(spec.accepting)
            .transitions(spec.transitions.into_iter().map(|t| (t.from, t.symbol, t.to)))
    }
}

impl Automaton {
    /// Export this automaton as a specification.
    ///
    /// Parts come out in sorted order, so exporting is deterministic.
    pub fn to_spec(&self) -> AutomatonSpec {
        AutomatonSpec {
            states: self.states().iter().cloned().collect(),
            alphabet: self.alphabet().iter().cloned().collect(),
            start: self.start().clone(),
            accepting: self.accepting().iter().cloned().collect(),
            transitions: self
                .transitions()
                .map(|(from, symbol, to)| TransitionSpec::new(from, symbol, to))
                .collect(),
        }
    }
}

/// Versioned, self-describing automaton document.
///
/// # Example
///
/// ```rust
/// use dfa_trace::definition::{AutomatonSpec, Definition, TransitionSpec};
///
/// let spec = AutomatonSpec {
///     states: vec!["A".into(), "B".into()],
///     alphabet: vec!["x".into()],
///     start: "A".into(),
///     accepting: vec!["B".into()],
///     transitions: vec![TransitionSpec::new("A", "x", "B")],
/// };
///
/// let definition = Definition::new("one x", spec).with_description("accepts exactly \"x\"");
/// let json = definition.to_json().unwrap();
///
/// let loaded = Definition::from_json(&json).unwrap();
/// let automaton = loaded.build().unwrap();
/// assert!(automaton.accepts("x"));
/// assert!(!automaton.accepts("xx"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Definition {
    /// Definition format version
    pub version: u32,

    /// Unique definition identifier
    pub id: String,

    /// When the definition was created
    pub created_at: DateTime<Utc>,

    /// Human readable name
    pub name: String,

    /// Optional free-form description, e.g. the regular expression the
    /// automaton was derived from
    #[serde(default)]
    pub description: Option<String>,

    /// The automaton itself
    pub automaton: AutomatonSpec,
}

impl Definition {
    /// Wrap a specification in a fresh document.
    pub fn new(name: impl Into<String>, automaton: AutomatonSpec) -> Self {
        Self {
            version: DEFINITION_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            name: name.into(),
            description: None,
            automaton,
        }
    }

    /// Attach a free-form description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject documents written by an incompatible format version.
    pub fn validate_version(&self) -> Result<(), DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }

    /// Check the version, then validate and build the automaton.
    pub fn build(&self) -> Result<Automaton, DefinitionError> {
        self.validate_version()?;
        Ok(self.automaton.build()?)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Parse a JSON document. The version is checked; the automaton is not
    /// validated until [`build`](Self::build).
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.validate_version()?;
        Ok(definition)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Decode a binary document produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.validate_version()?;
        Ok(definition)
    }
}
