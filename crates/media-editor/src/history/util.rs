//! Helpers shared by the history applicators.

use media_editor_util::approximate_equal;
use serde_json::Value;

use super::types::{HistoryItem, Path};

/// Position of the first element whose `id` field equals `id`.
///
/// Numeric ids compare by value, so `1` matches `1.0`.
pub fn find_index_by_id(arr: &[Value], id: &Value) -> Option<usize> {
    arr.iter()
        .position(|el| el.get("id").is_some_and(|el_id| ids_match(el_id, id)))
}

fn ids_match(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Build a `Set` item for a `before` → `after` edit, or `None` when the two
/// states are approximately equal and the edit is not worth recording.
pub fn record_change(path: Path, before: &Value, after: &Value) -> Option<HistoryItem> {
    if approximate_equal(before, after) {
        return None;
    }
    Some(HistoryItem::set(path, before.clone(), after.clone()))
}
