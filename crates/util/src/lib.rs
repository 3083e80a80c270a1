//! media-editor-util - Utility functions for the media editor core
//!
//! Tolerant structural equality for deciding whether an edit is worth
//! recording, and the interpolation primitives the tween scheduler builds on.

pub mod json_equal;
pub mod lerp;

// Re-exports for convenience
pub use json_equal::{approximate_equal, approximate_equal_with, COMPARISON_ERROR};
pub use lerp::{lerp, lerp_array};
