//! State identifiers and input symbols.
//!
//! Both are thin wrappers around `String`. They borrow as `str`, so every
//! lookup on an [`Automaton`](super::Automaton) can take a plain `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a single automaton state.
///
/// # Example
///
/// ```rust
/// use dfa_trace::core::StateId;
///
/// let state = StateId::from("q1");
/// assert_eq!(state.name(), "q1");
/// assert_eq!(state.to_string(), "q1");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state identifier from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A single input symbol.
///
/// Most alphabets use one character per symbol, but multi-character tokens
/// are allowed. Those can only be consumed through
/// [`evaluate_symbols`](crate::eval::evaluate_symbols).
///
/// # Example
///
/// ```rust
/// use dfa_trace::core::Symbol;
///
/// assert_eq!(Symbol::from('a'), Symbol::from("a"));
/// assert_eq!(Symbol::from("ab").as_str(), "ab");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from its token text.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&String> for $ty {
            fn from(value: &String) -> Self {
                Self(value.clone())
            }
        }

        impl From<&$ty> for $ty {
            fn from(value: &$ty) -> Self {
                value.clone()
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_newtype_impls!(StateId);
string_newtype_impls!(Symbol);

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}
