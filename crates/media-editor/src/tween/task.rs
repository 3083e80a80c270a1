//! A single interpolation task, advanced one frame at a time.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use media_editor_util::{lerp, lerp_array};

use super::easing::{default_easing, Easing};
use super::TweenError;

// ── Values ────────────────────────────────────────────────────────────────

/// A tweened value: one number, or a fixed-length vector such as a
/// position or an RGBA color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TweenValue {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// The shape of a [`TweenValue`]; start and end must agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Vector(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::Vector(len) => write!(f, "vector of length {len}"),
        }
    }
}

impl TweenValue {
    pub fn shape(&self) -> Shape {
        match self {
            TweenValue::Scalar(_) => Shape::Scalar,
            TweenValue::Vector(v) => Shape::Vector(v.len()),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            TweenValue::Scalar(x) => Some(*x),
            TweenValue::Vector(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            TweenValue::Scalar(_) => None,
            TweenValue::Vector(v) => Some(v),
        }
    }

    /// Interpolate every component towards `end`. Shapes are assumed to
    /// match; see [`Tween::new`].
    fn lerp_to(&self, end: &TweenValue, progress: f64) -> TweenValue {
        match (self, end) {
            (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(lerp(*a, *b, progress)),
            (TweenValue::Vector(a), TweenValue::Vector(b)) => TweenValue::Vector(lerp_array(a, b, progress)),
            _ => self.clone(),
        }
    }
}

impl From<f64> for TweenValue {
    fn from(x: f64) -> Self {
        TweenValue::Scalar(x)
    }
}

impl From<Vec<f64>> for TweenValue {
    fn from(v: Vec<f64>) -> Self {
        TweenValue::Vector(v)
    }
}

impl<const N: usize> From<[f64; N]> for TweenValue {
    fn from(v: [f64; N]) -> Self {
        TweenValue::Vector(v.to_vec())
    }
}

// ── Tween ─────────────────────────────────────────────────────────────────

/// Result of advancing a tween by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenStep {
    /// More frames follow.
    Continue(TweenValue),
    /// Final frame; the value equals the tween's end.
    Done(TweenValue),
}

impl TweenStep {
    pub fn value(&self) -> &TweenValue {
        match self {
            TweenStep::Continue(v) | TweenStep::Done(v) => v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TweenStep::Done(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Finished,
    Canceled,
}

/// Interpolates `start` → `end` over `duration` time units.
///
/// The tween has no clock of its own: it is driven by calling
/// [`advance`](Tween::advance) with frame timestamps. The first timestamp it
/// sees becomes its origin.
#[derive(Clone)]
pub struct Tween {
    start: TweenValue,
    end: TweenValue,
    duration: f64,
    easing: Arc<dyn Easing>,
    start_time: Option<f64>,
    phase: Phase,
}

impl Tween {
    /// # Errors
    ///
    /// - [`TweenError::ShapeMismatch`] when `start` and `end` differ in shape
    /// - [`TweenError::InvalidDuration`] unless `duration` is finite and > 0
    pub fn new(
        start: impl Into<TweenValue>,
        end: impl Into<TweenValue>,
        duration: f64,
    ) -> Result<Self, TweenError> {
        let start = start.into();
        let end = end.into();
        if start.shape() != end.shape() {
            return Err(TweenError::ShapeMismatch {
                start: start.shape(),
                end: end.shape(),
            });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TweenError::InvalidDuration(duration));
        }
        Ok(Self {
            start,
            end,
            duration,
            easing: default_easing(),
            start_time: None,
            phase: Phase::Running,
        })
    }

    pub fn with_easing(mut self, easing: Arc<dyn Easing>) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear progress in `[0, 1]` at `timestamp`; 0 before the first frame.
    pub fn progress_at(&self, timestamp: f64) -> f64 {
        match self.start_time {
            Some(origin) => ((timestamp - origin) / self.duration).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// The eased, interpolated value at linear `progress`.
    pub fn sample(&self, progress: f64) -> TweenValue {
        let eased = self.easing.ease(progress.clamp(0.0, 1.0));
        self.start.lerp_to(&self.end, eased)
    }

    /// Produce the frame for `timestamp`.
    ///
    /// Returns `None` once the tween has finished or been canceled.
    pub fn advance(&mut self, timestamp: f64) -> Option<TweenStep> {
        if self.phase != Phase::Running {
            return None;
        }
        let origin = *self.start_time.get_or_insert(timestamp);
        let progress = ((timestamp - origin) / self.duration).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.phase = Phase::Finished;
            return Some(TweenStep::Done(self.end.clone()));
        }
        Some(TweenStep::Continue(self.sample(progress)))
    }

    /// Stop the tween. Later calls to `advance` yield nothing. Canceling a
    /// finished tween has no effect.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Canceled;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_canceled(&self) -> bool {
        self.phase == Phase::Canceled
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("start_time", &self.start_time)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
