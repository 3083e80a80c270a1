use serde_json::Value;

/// Absolute tolerance under which two numbers compare equal.
pub const COMPARISON_ERROR: f64 = 0.001;

/// Performs a tolerant deep equality check between two state values.
///
/// - Numbers are equal when they differ by less than [`COMPARISON_ERROR`]
/// - Arrays are equal when they have the same length and pairwise equal items
/// - Objects are compared over the union of their keys; a key present on one
///   side only never matches
/// - Everything else (null, bool, string) compares strictly
///
/// Values of different kinds are never equal. Used to decide whether an edit
/// moved the state far enough to be worth recording.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use media_editor_util::json_equal::approximate_equal;
///
/// assert!(approximate_equal(&json!(1.0), &json!(1.0005)));
/// assert!(!approximate_equal(&json!(1.0), &json!(1.01)));
/// assert!(!approximate_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
/// ```
pub fn approximate_equal(a: &Value, b: &Value) -> bool {
    approximate_equal_with(a, b, COMPARISON_ERROR)
}

/// Same as [`approximate_equal`] with a caller-chosen tolerance.
pub fn approximate_equal_with(a: &Value, b: &Value, tolerance: f64) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => (x - y).abs() < tolerance,
            _ => x == y,
        },
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b)
                    .all(|(x, y)| approximate_equal_with(x, y, tolerance))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            let left = obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => approximate_equal_with(val_a, val_b, tolerance),
                None => false,
            });
            left && obj_b.keys().all(|key| obj_a.contains_key(key))
        }

        _ => false,
    }
}
