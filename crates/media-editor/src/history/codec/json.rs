//! JSON codec for history items.
//!
//! Converts items to/from `serde_json::Value`:
//!
//! ```json
//! {"kind": "set", "path": ["layers", 0, "scale"], "oldValue": 1, "newValue": 2}
//! {"kind": "inserted", "path": ["layers", 1], "value": {"id": 5}, "findBy": {"id": 5}}
//! {"kind": "removed", "path": "/layers/0", "value": {"id": 3}}
//! ```
//!
//! Paths are encoded as step arrays; pointer strings are accepted on input.

use serde_json::{json, Map, Value};

use media_editor_path::{parse_path, validate_path, validate_pointer};

use crate::history::types::{Change, FindBy, HistoryError, HistoryItem, Path, PathStep};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[PathStep]) -> Value {
    Value::Array(
        path.iter()
            .map(|step| match step {
                PathStep::Index(i) => json!(i),
                PathStep::Key(k) => json!(k),
            })
            .collect(),
    )
}

fn decode_path(v: &Value) -> Result<Path, HistoryError> {
    let path: Path = match v {
        Value::String(pointer) => {
            validate_pointer(pointer)?;
            parse_path(pointer)
        }
        Value::Array(_) => serde_json::from_value(v.clone())
            .map_err(|e| HistoryError::InvalidItem(format!("bad path step: {e}")))?,
        _ => return Err(HistoryError::InvalidItem("path must be an array or a string".into())),
    };
    validate_path(&path)?;
    Ok(path)
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value, HistoryError> {
    obj.get(name)
        .ok_or_else(|| HistoryError::InvalidItem(format!("missing field `{name}`")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a [`HistoryItem`] to a `serde_json::Value`.
pub fn to_json(item: &HistoryItem) -> Value {
    let mut m = Map::new();
    match &item.change {
        Change::Set { old_value, new_value } => {
            m.insert("kind".into(), json!("set"));
            m.insert("path".into(), encode_path(&item.path));
            m.insert("oldValue".into(), old_value.clone());
            m.insert("newValue".into(), new_value.clone());
        }
        Change::Inserted { value } => {
            m.insert("kind".into(), json!("inserted"));
            m.insert("path".into(), encode_path(&item.path));
            m.insert("value".into(), value.clone());
        }
        Change::Removed { value } => {
            m.insert("kind".into(), json!("removed"));
            m.insert("path".into(), encode_path(&item.path));
            m.insert("value".into(), value.clone());
        }
    }
    if let Some(find_by) = &item.find_by {
        m.insert("findBy".into(), json!({ "id": find_by.id }));
    }
    Value::Object(m)
}

/// Serialize a group of items to a JSON array.
pub fn to_json_items(items: &[HistoryItem]) -> Value {
    Value::Array(items.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a [`HistoryItem`] from a `serde_json::Value`.
pub fn from_json(v: &Value) -> Result<HistoryItem, HistoryError> {
    let obj = v
        .as_object()
        .ok_or_else(|| HistoryError::InvalidItem("item must be an object".into()))?;
    let kind = field(obj, "kind")?
        .as_str()
        .ok_or_else(|| HistoryError::InvalidItem("kind must be a string".into()))?;
    let path = decode_path(field(obj, "path")?)?;

    let change = match kind {
        "set" => Change::Set {
            old_value: field(obj, "oldValue")?.clone(),
            new_value: field(obj, "newValue")?.clone(),
        },
        "inserted" => Change::Inserted {
            value: field(obj, "value")?.clone(),
        },
        "removed" => Change::Removed {
            value: field(obj, "value")?.clone(),
        },
        other => return Err(HistoryError::InvalidItem(format!("unknown kind: {other}"))),
    };

    let find_by = match obj.get("findBy") {
        None | Some(Value::Null) => None,
        Some(Value::Object(fb)) => Some(FindBy {
            id: field(fb, "id")?.clone(),
        }),
        Some(_) => return Err(HistoryError::InvalidItem("findBy must be an object".into())),
    };

    Ok(HistoryItem { path, change, find_by })
}

/// Deserialize a JSON array of items.
pub fn from_json_items(v: &Value) -> Result<Vec<HistoryItem>, HistoryError> {
    let arr = v
        .as_array()
        .ok_or_else(|| HistoryError::InvalidItem("items must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
