//! Value tweening.
//!
//! A [`Tween`] interpolates a scalar or a fixed-length vector from a start to
//! an end value over a duration, shaped by an [`Easing`]. The
//! [`FrameScheduler`] drives any number of tweens from host frame ticks and
//! reports each interpolated value to a callback.

mod easing;
mod scheduler;
mod task;

use thiserror::Error;

pub use easing::{default_easing, easing_by_name, CubicBezier, Easing, Linear};
pub use scheduler::{CancelHandle, FrameScheduler, TweenOptions};
pub use task::{Shape, Tween, TweenStep, TweenValue};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TweenError {
    #[error("start and end shapes differ: {start} vs {end}")]
    ShapeMismatch { start: Shape, end: Shape },
    #[error("duration must be a positive finite number of milliseconds, got {0}")]
    InvalidDuration(f64),
    #[error("bezier control point out of range: {0}")]
    InvalidControlPoint(f64),
}
