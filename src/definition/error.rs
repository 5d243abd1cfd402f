//! Definition document error types.

use crate::builder::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading, storing or building a definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Document version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The embedded automaton failed validation
    #[error("Invalid automaton: {0}")]
    Invalid(#[from] ValidationError),
}
