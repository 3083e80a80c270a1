use crate::types::PathStep;
use crate::PathError;

/// Unescapes a pointer component (`~1` → `/`, `~0` → `~`).
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a pointer component (`~` → `~0`, `/` → `~1`).
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string (`/layers/0/position`) into path steps.
///
/// Components that are canonical non-negative integers become
/// [`PathStep::Index`]; everything else is a [`PathStep::Key`].
pub fn parse_path(pointer: &str) -> Vec<PathStep> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/')
        .map(|component| {
            if is_valid_index(component) {
                if let Ok(idx) = component.parse() {
                    return PathStep::Index(idx);
                }
            }
            PathStep::Key(unescape_component(component))
        })
        .collect()
}

/// Format path steps into a pointer string. The root path formats as `""`.
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&escape_component(&step.as_key()));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` path strictly contains the `child` path.
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
pub fn parent(path: &[PathStep]) -> Result<Vec<PathStep>, PathError> {
    match path.split_last() {
        Some((_, head)) => Ok(head.to_vec()),
        None => Err(PathError::NoParent),
    }
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
