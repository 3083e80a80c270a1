use serde_json::Value;

use crate::types::{Parent, PathStep};
use crate::PathError;

/// Strict lookup: like [`get`](crate::get) but reports which step failed.
pub fn find<'a>(val: &'a Value, path: &[PathStep]) -> Result<&'a Value, PathError> {
    let mut current = val;
    for (depth, step) in path.iter().enumerate() {
        current = match current {
            Value::Array(arr) => {
                let idx = step.as_index().ok_or_else(|| PathError::InvalidIndex {
                    segment: step.clone(),
                })?;
                arr.get(idx).ok_or_else(|| PathError::NotFound {
                    segment: step.clone(),
                    depth,
                })?
            }
            Value::Object(map) => {
                map.get(&*step.as_key())
                    .ok_or_else(|| PathError::NotFound {
                        segment: step.clone(),
                        depth,
                    })?
            }
            _ => {
                return Err(PathError::NotIndexable {
                    segment: step.clone(),
                    depth,
                })
            }
        };
    }
    Ok(current)
}

fn step_mut<'a>(
    current: &'a mut Value,
    step: &PathStep,
    depth: usize,
) -> Result<&'a mut Value, PathError> {
    match current {
        Value::Array(arr) => {
            let idx = step.as_index().ok_or_else(|| PathError::InvalidIndex {
                segment: step.clone(),
            })?;
            arr.get_mut(idx).ok_or_else(|| PathError::NotFound {
                segment: step.clone(),
                depth,
            })
        }
        Value::Object(map) => {
            map.get_mut(&*step.as_key())
                .ok_or_else(|| PathError::NotFound {
                    segment: step.clone(),
                    depth,
                })
        }
        _ => Err(PathError::NotIndexable {
            segment: step.clone(),
            depth,
        }),
    }
}

/// Walk every step but the last and return the container that holds the
/// target together with the final step.
///
/// Returns `Ok(None)` for the root path, which has no parent.
///
/// # Errors
///
/// Fails with the first step that cannot be followed, or with
/// [`PathError::NotIndexable`] when the parent itself is a scalar.
///
/// # Example
///
/// ```
/// use media_editor_path::{parse_path, resolve_parent_mut, Parent};
/// use serde_json::json;
///
/// let mut doc = json!({"layers": [{"id": 1}]});
/// let path = parse_path("/layers/0");
/// let (parent, key) = resolve_parent_mut(&mut doc, &path).unwrap().unwrap();
/// assert!(matches!(parent, Parent::Sequence(_)));
/// assert_eq!(key.as_index(), Some(0));
/// ```
pub fn resolve_parent_mut<'v, 'p>(
    root: &'v mut Value,
    path: &'p [PathStep],
) -> Result<Option<(Parent<'v>, &'p PathStep)>, PathError> {
    let Some((last, head)) = path.split_last() else {
        return Ok(None);
    };
    let mut current = root;
    for (depth, step) in head.iter().enumerate() {
        current = step_mut(current, step, depth)?;
    }
    let parent = match current {
        Value::Array(arr) => Parent::Sequence(arr),
        Value::Object(map) => Parent::Mapping(map),
        _ => {
            return Err(PathError::NotIndexable {
                segment: last.clone(),
                depth: head.len(),
            })
        }
    };
    Ok(Some((parent, last)))
}
