//! Type definitions for state paths.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::is_valid_index;

/// A step in a state path.
///
/// Either a property name (mapping key) or a position (sequence index).
/// Serialized untagged, so `["layers", 0, "position"]` round-trips through
/// JSON as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

impl PathStep {
    pub fn key(key: impl Into<String>) -> Self {
        PathStep::Key(key.into())
    }

    pub fn index(index: usize) -> Self {
        PathStep::Index(index)
    }

    /// The step as a sequence index.
    ///
    /// Keys that spell a canonical non-negative integer (`"0"`, `"12"`, but
    /// not `"01"`) are accepted as indices.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(i) => Some(*i),
            PathStep::Key(k) if is_valid_index(k) => k.parse().ok(),
            PathStep::Key(_) => None,
        }
    }

    /// The step as a mapping key. Indices are rendered in decimal.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            PathStep::Index(i) => Cow::Owned(i.to_string()),
            PathStep::Key(k) => Cow::Borrowed(k),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "{i}"),
            PathStep::Key(k) => f.write_str(k),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

/// A root-to-target path into a state tree.
pub type Path = Vec<PathStep>;

/// The container that holds the value a path points at.
#[derive(Debug)]
pub enum Parent<'a> {
    Sequence(&'a mut Vec<Value>),
    Mapping(&'a mut Map<String, Value>),
}

impl Parent<'_> {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Parent::Sequence(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Parent::Sequence(arr) => arr.len(),
            Parent::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
