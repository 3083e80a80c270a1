//! media-editor — editing core for the media editor.
//!
//! - [`history`] — path-addressed undo/redo patches over the editor state
//! - [`tween`] — eased interpolation of scalars and vectors driven by frames
//! - [`quality`] — export height snapping
//! - [`cli`] — logic behind the `history-undo` and `tween-sample` tools
//!
//! The editor state is a `serde_json::Value`; paths into it come from
//! [`media_editor_path`] and approximate comparison from
//! [`media_editor_util`].

pub mod history;
pub mod tween;
pub mod quality;
pub mod cli;

pub use media_editor_util::approximate_equal;
