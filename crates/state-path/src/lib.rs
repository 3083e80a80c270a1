//! Path addressing for media editor state trees.
//!
//! Editor state is a `serde_json::Value` tree: scalars, sequences (`Array`)
//! and mappings (`Object`). A [`Path`] addresses one node in that tree,
//! root to target, as a list of property names and sequence positions.
//!
//! # Example
//!
//! ```
//! use media_editor_path::{format_path, get, parse_path, PathStep};
//!
//! let path = parse_path("/layers/0/position");
//! assert_eq!(path[1], PathStep::Index(0));
//! assert_eq!(format_path(&path), "/layers/0/position");
//!
//! let doc = serde_json::json!({"layers": [{"position": [10, 20]}]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!([10, 20])));
//! ```

use thiserror::Error;

pub mod find;
pub mod get;
pub mod types;
pub mod util;
pub mod validate;

pub use find::{find, resolve_parent_mut};
pub use get::{get, get_mut};
pub use types::{Parent, Path, PathStep};
pub use util::{
    escape_component, format_path, is_child, is_root, is_valid_index, parent, parse_path,
    unescape_component,
};
pub use validate::{validate_path, validate_pointer, MAX_PATH_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("segment `{segment}` not found at depth {depth}")]
    NotFound { segment: PathStep, depth: usize },
    #[error("cannot step into a scalar with segment `{segment}` at depth {depth}")]
    NotIndexable { segment: PathStep, depth: usize },
    #[error("segment `{segment}` is not a valid sequence index")]
    InvalidIndex { segment: PathStep },
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("segment `{segment}` does not address a sequence element")]
    NotASequence { segment: PathStep },
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("Path too long")]
    PathTooLong,
}
