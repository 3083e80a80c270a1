//! Tolerant equality over editor state values.

mod approximate_equal;

pub use approximate_equal::{approximate_equal, approximate_equal_with, COMPARISON_ERROR};
