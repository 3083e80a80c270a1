//! Forward edits that record themselves.
//!
//! Each function mutates the state in place and returns the [`HistoryItem`]
//! that reverts the mutation.

use serde_json::Value;

use media_editor_path::{find, resolve_parent_mut, Parent, PathError};

use super::types::{element_id, HistoryError, HistoryItem, Path, PathStep};
use super::util::record_change;

/// Overwrite the value at `path`.
///
/// Returns `Ok(None)` without touching the state when the new value is
/// approximately equal to the current one. The target must already exist;
/// the root itself cannot be replaced this way.
pub fn set_value(root: &mut Value, path: Path, value: Value) -> Result<Option<HistoryItem>, HistoryError> {
    if path.is_empty() {
        return Err(PathError::NoParent.into());
    }
    let before = find(root, &path)?.clone();
    let Some(item) = record_change(path, &before, &value) else {
        return Ok(None);
    };
    write(root, &item.path, value)?;
    Ok(Some(item))
}

fn write(root: &mut Value, path: &Path, value: Value) -> Result<(), HistoryError> {
    match resolve_parent_mut(root, path)? {
        None => return Err(PathError::NoParent.into()),
        Some((Parent::Mapping(map), key)) => {
            map.insert(key.as_key().into_owned(), value);
        }
        Some((Parent::Sequence(arr), key)) => {
            let len = arr.len();
            let idx = key
                .as_index()
                .ok_or_else(|| PathError::InvalidIndex { segment: key.clone() })?;
            let slot = arr.get_mut(idx).ok_or(PathError::IndexOutOfBounds { index: idx, len })?;
            *slot = value;
        }
    }
    Ok(())
}

/// Insert `value` into the sequence at `path`, whose last step is the
/// insertion index (clamped to the sequence length).
///
/// The returned item locates the element by its `id` when it has one, so
/// the undo still finds it after other elements move.
pub fn insert_value(root: &mut Value, path: Path, value: Value) -> Result<HistoryItem, HistoryError> {
    let (arr, key) = sequence_parent(root, &path)?;
    let idx = key
        .as_index()
        .ok_or_else(|| PathError::InvalidIndex { segment: key.clone() })?
        .min(arr.len());
    arr.insert(idx, value.clone());

    let mut recorded = path;
    if let Some(last) = recorded.last_mut() {
        *last = idx.into();
    }
    let item = HistoryItem::inserted(recorded, value.clone());
    Ok(match element_id(&value) {
        Some(id) => item.with_find_by(id),
        None => item,
    })
}

/// Remove the element at `path` from its sequence.
pub fn remove_value(root: &mut Value, path: Path) -> Result<HistoryItem, HistoryError> {
    let (arr, key) = sequence_parent(root, &path)?;
    let len = arr.len();
    let idx = key
        .as_index()
        .ok_or_else(|| PathError::InvalidIndex { segment: key.clone() })?;
    if idx >= len {
        return Err(PathError::IndexOutOfBounds { index: idx, len }.into());
    }
    let value = arr.remove(idx);
    Ok(HistoryItem::removed(path, value))
}

fn sequence_parent<'v, 'p>(
    root: &'v mut Value,
    path: &'p Path,
) -> Result<(&'v mut Vec<Value>, &'p PathStep), HistoryError> {
    match resolve_parent_mut(root, path)? {
        Some((Parent::Sequence(arr), key)) => Ok((arr, key)),
        Some((Parent::Mapping(_), key)) => Err(PathError::NotASequence { segment: key.clone() }.into()),
        None => Err(PathError::NoParent.into()),
    }
}
