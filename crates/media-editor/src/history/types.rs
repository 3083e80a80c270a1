//! Core types for the history module.
//!
//! A [`HistoryItem`] records one reversible mutation of the editor state:
//! where it happened (a [`Path`]), what changed ([`Change`]) and optionally
//! which sequence element it belongs to ([`FindBy`]).

use serde_json::Value;
use thiserror::Error;

pub use media_editor_path::{Path, PathError, PathStep};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HistoryError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("INVALID_ITEM: {0}")]
    InvalidItem(String),
}

// ── Change ────────────────────────────────────────────────────────────────

/// What the forward edit did at the item's path.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// The value at the path was overwritten. Reverting restores `old_value`.
    Set { old_value: Value, new_value: Value },
    /// `value` was inserted into a sequence. Reverting removes it again.
    Inserted { value: Value },
    /// `value` was removed from a sequence. Reverting re-inserts it.
    Removed { value: Value },
}

impl Change {
    pub fn is_structural(&self) -> bool {
        !matches!(self, Change::Set { .. })
    }
}

/// Locates a sequence element by its `id` field instead of by position.
#[derive(Debug, Clone, PartialEq)]
pub struct FindBy {
    pub id: Value,
}

// ── HistoryItem ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub path: Path,
    pub change: Change,
    pub find_by: Option<FindBy>,
}

impl HistoryItem {
    pub fn set(path: Path, old_value: Value, new_value: Value) -> Self {
        Self {
            path,
            change: Change::Set { old_value, new_value },
            find_by: None,
        }
    }

    pub fn inserted(path: Path, value: Value) -> Self {
        Self {
            path,
            change: Change::Inserted { value },
            find_by: None,
        }
    }

    pub fn removed(path: Path, value: Value) -> Self {
        Self {
            path,
            change: Change::Removed { value },
            find_by: None,
        }
    }

    pub fn with_find_by(mut self, id: impl Into<Value>) -> Self {
        self.find_by = Some(FindBy { id: id.into() });
        self
    }

    /// The value restored on revert, if any.
    pub fn old_value(&self) -> Option<&Value> {
        match &self.change {
            Change::Set { old_value, .. } => Some(old_value),
            Change::Removed { value } => Some(value),
            Change::Inserted { .. } => None,
        }
    }

    /// The value written by the forward edit, if any.
    pub fn new_value(&self) -> Option<&Value> {
        match &self.change {
            Change::Set { new_value, .. } => Some(new_value),
            Change::Inserted { value } => Some(value),
            Change::Removed { .. } => None,
        }
    }

    /// The item whose application replays the forward edit.
    ///
    /// Re-insertions are addressed by the recorded index, since the element
    /// being restored is by definition absent from the sequence. Removals
    /// pick up a `find_by` from the element's `id` when it has one.
    pub fn inverse(&self) -> Self {
        match &self.change {
            Change::Set { old_value, new_value } => Self {
                path: self.path.clone(),
                change: Change::Set {
                    old_value: new_value.clone(),
                    new_value: old_value.clone(),
                },
                find_by: self.find_by.clone(),
            },
            Change::Inserted { value } => Self::removed(self.path.clone(), value.clone()),
            Change::Removed { value } => Self {
                path: self.path.clone(),
                change: Change::Inserted { value: value.clone() },
                find_by: element_id(value).map(|id| FindBy { id }),
            },
        }
    }
}

/// The `id` field of a sequence element, when it is an object that has one.
pub fn element_id(value: &Value) -> Option<Value> {
    value.get("id").filter(|id| !id.is_null()).cloned()
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for applying a group of history items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Apply the group to a scratch copy and commit only if every item
    /// succeeds. When `false` items are applied in place and a failure
    /// leaves the items before it applied.
    pub atomic: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}
