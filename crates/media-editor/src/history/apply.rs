//! History apply logic.
//!
//! Applying a [`HistoryItem`] reverts the edit it records: the item's path
//! is resolved down to the container that holds the target and the old
//! state is written back. Resolution completes before anything is written,
//! so an item that fails leaves the state untouched.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use media_editor_path::{format_path, resolve_parent_mut, Parent, PathError};

use super::types::{ApplyOptions, Change, FindBy, HistoryError, HistoryItem, PathStep};
use super::util::find_index_by_id;

// ── Index resolution ──────────────────────────────────────────────────────

/// Resolve the sequence position an item addresses.
///
/// With `find_by` the element is located by identity; a missing element
/// resolves to the append position.
fn resolve_index(arr: &[Value], key: &PathStep, find_by: Option<&FindBy>) -> Result<usize, PathError> {
    match find_by {
        Some(FindBy { id }) => Ok(find_index_by_id(arr, id).unwrap_or(arr.len())),
        None => key
            .as_index()
            .ok_or_else(|| PathError::InvalidIndex { segment: key.clone() }),
    }
}

// ── Container applicators ─────────────────────────────────────────────────

fn apply_to_sequence(arr: &mut Vec<Value>, key: &PathStep, item: &HistoryItem) -> Result<(), HistoryError> {
    let idx = resolve_index(arr, key, item.find_by.as_ref())?;
    let len = arr.len();
    match &item.change {
        Change::Removed { value } => {
            arr.insert(idx.min(len), value.clone());
        }
        Change::Inserted { .. } => {
            if idx >= len {
                return Err(PathError::IndexOutOfBounds { index: idx, len }.into());
            }
            arr.remove(idx);
        }
        Change::Set { old_value, .. } => {
            let slot = arr
                .get_mut(idx)
                .ok_or(PathError::IndexOutOfBounds { index: idx, len })?;
            *slot = old_value.clone();
        }
    }
    Ok(())
}

fn apply_to_mapping(map: &mut Map<String, Value>, key: &PathStep, item: &HistoryItem) -> Result<(), HistoryError> {
    if item.find_by.is_some() || item.change.is_structural() {
        return Err(PathError::NotASequence { segment: key.clone() }.into());
    }
    if let Change::Set { old_value, .. } = &item.change {
        map.insert(key.as_key().into_owned(), old_value.clone());
    }
    Ok(())
}

// ── Public API ────────────────────────────────────────────────────────────

/// Revert a single history item against `root`, in place.
///
/// An empty path is a no-op.
///
/// # Errors
///
/// Returns [`HistoryError::Path`] when the path cannot be resolved against
/// the current shape of `root`. Nothing is modified in that case.
///
/// # Example
///
/// ```
/// use media_editor::history::{apply_history_item, HistoryItem};
/// use media_editor_path::parse_path;
/// use serde_json::json;
///
/// let mut state = json!({"layers": [{"id": 1, "scale": 2.0}]});
/// let item = HistoryItem::set(parse_path("/layers/0/scale"), json!(1.0), json!(2.0));
/// apply_history_item(&mut state, &item).unwrap();
/// assert_eq!(state, json!({"layers": [{"id": 1, "scale": 1.0}]}));
/// ```
pub fn apply_history_item(root: &mut Value, item: &HistoryItem) -> Result<(), HistoryError> {
    let Some((parent, key)) = resolve_parent_mut(root, &item.path)? else {
        trace!("empty history path, nothing to apply");
        return Ok(());
    };
    debug!(path = %format_path(&item.path), change = change_kind(&item.change), "applying history item");
    match parent {
        Parent::Sequence(arr) => apply_to_sequence(arr, key, item),
        Parent::Mapping(map) => apply_to_mapping(map, key, item),
    }
}

/// Revert a group of items recorded in order, so the last one is applied
/// first.
///
/// With `options.atomic` the group runs against a copy of `root` that
/// replaces it only if every item succeeds.
pub fn apply_history_items(root: &mut Value, items: &[HistoryItem], options: &ApplyOptions) -> Result<(), HistoryError> {
    if options.atomic {
        let mut working = root.clone();
        for item in items.iter().rev() {
            apply_history_item(&mut working, item)?;
        }
        *root = working;
    } else {
        for item in items.iter().rev() {
            apply_history_item(root, item)?;
        }
    }
    Ok(())
}

fn change_kind(change: &Change) -> &'static str {
    match change {
        Change::Set { .. } => "set",
        Change::Inserted { .. } => "inserted",
        Change::Removed { .. } => "removed",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
