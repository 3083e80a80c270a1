use serde_json::Value;

use crate::types::PathStep;

/// Get a value from a state tree by path.
///
/// Returns `None` if any step is missing or descends into a scalar.
pub fn get<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(step.as_index()?)?,
            Value::Object(map) => map.get(&*step.as_key())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a state tree by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(step.as_index()?)?,
            Value::Object(map) => map.get_mut(&*step.as_key())?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_path;
    use serde_json::json;

    #[test]
    fn test_get() {
        let doc = json!({"layers": [{"id": 1, "scale": 2.0}]});
        assert_eq!(get(&doc, &parse_path("/layers/0/scale")), Some(&json!(2.0)));
        assert_eq!(get(&doc, &parse_path("")), Some(&doc));
        assert_eq!(get(&doc, &parse_path("/layers/1")), None);
        assert_eq!(get(&doc, &parse_path("/layers/x")), None);
        assert_eq!(get(&doc, &parse_path("/layers/0/scale/deep")), None);
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"crop": {"angle": 0}});
        *get_mut(&mut doc, &parse_path("/crop/angle")).unwrap() = json!(90);
        assert_eq!(doc, json!({"crop": {"angle": 90}}));
    }

    #[test]
    fn test_index_step_on_mapping() {
        let doc = json!({"0": "zero"});
        assert_eq!(get(&doc, &[PathStep::index(0)]), Some(&json!("zero")));
    }
}
