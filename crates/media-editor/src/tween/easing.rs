//! Easing functions.
//!
//! An easing remaps linear progress in `[0, 1]` before interpolation. Every
//! easing must map 0 to 0 and 1 to 1. Easings are pure, so one instance can
//! drive any number of tweens at once.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::TweenError;

pub trait Easing: Send + Sync {
    fn ease(&self, progress: f64) -> f64;
}

impl<F> Easing for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn ease(&self, progress: f64) -> f64 {
        self(progress)
    }
}

/// Identity easing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

impl Easing for Linear {
    fn ease(&self, progress: f64) -> f64 {
        progress
    }
}

// ── Cubic Bézier ──────────────────────────────────────────────────────────

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

const SPLINE_TABLE_SIZE: usize = 11;
const SAMPLE_STEP_SIZE: f64 = 1.0 / (SPLINE_TABLE_SIZE as f64 - 1.0);

fn coeff_a(a1: f64, a2: f64) -> f64 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

fn coeff_b(a1: f64, a2: f64) -> f64 {
    3.0 * a2 - 6.0 * a1
}

fn coeff_c(a1: f64) -> f64 {
    3.0 * a1
}

/// x(t) or y(t) of the curve, given the two inner control coordinates.
fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
    ((coeff_a(a1, a2) * t + coeff_b(a1, a2)) * t + coeff_c(a1)) * t
}

/// dx/dt or dy/dt.
fn slope(t: f64, a1: f64, a2: f64) -> f64 {
    3.0 * coeff_a(a1, a2) * t * t + 2.0 * coeff_b(a1, a2) * t + coeff_c(a1)
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve anchored at (0, 0)
/// and (1, 1).
#[derive(Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    samples: [f64; SPLINE_TABLE_SIZE],
}

impl CubicBezier {
    /// # Errors
    ///
    /// The x coordinates must lie in `[0, 1]` for the curve to be a function
    /// of progress.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, TweenError> {
        for x in [x1, x2] {
            if !(0.0..=1.0).contains(&x) {
                return Err(TweenError::InvalidControlPoint(x));
            }
        }
        if !y1.is_finite() || !y2.is_finite() {
            return Err(TweenError::InvalidControlPoint(if y1.is_finite() { y2 } else { y1 }));
        }
        Ok(Self::from_points(x1, y1, x2, y2))
    }

    fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut samples = [0.0; SPLINE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = calc_bezier(i as f64 * SAMPLE_STEP_SIZE, x1, x2);
        }
        Self { x1, y1, x2, y2, samples }
    }

    /// `cubic-bezier(0.42, 0, 0.58, 1)`, the default tween easing.
    pub fn ease_in_out() -> Self {
        Self::from_points(0.42, 0.0, 0.58, 1.0)
    }

    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`, a gentle ease used for UI motion.
    pub fn simple() -> Self {
        Self::from_points(0.25, 0.1, 0.25, 1.0)
    }

    pub fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    fn newton_raphson(&self, x: f64, mut guess: f64) -> f64 {
        for _ in 0..NEWTON_ITERATIONS {
            let current_slope = slope(guess, self.x1, self.x2);
            if current_slope == 0.0 {
                return guess;
            }
            let current_x = calc_bezier(guess, self.x1, self.x2) - x;
            guess -= current_x / current_slope;
        }
        guess
    }

    fn binary_subdivide(&self, x: f64, mut lo: f64, mut hi: f64) -> f64 {
        let mut t = lo;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let current_x = calc_bezier(t, self.x1, self.x2) - x;
            if current_x.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if current_x > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
        }
        t
    }

    /// Solve x(t) = `x` for the curve parameter t.
    fn t_for_x(&self, x: f64) -> f64 {
        let last_sample = SPLINE_TABLE_SIZE - 1;
        let mut interval_start = 0.0;
        let mut current = 1;
        while current != last_sample && self.samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }
        current -= 1;

        let span = self.samples[current + 1] - self.samples[current];
        let dist = if span > 0.0 { (x - self.samples[current]) / span } else { 0.0 };
        let guess = interval_start + dist * SAMPLE_STEP_SIZE;

        let initial_slope = slope(guess, self.x1, self.x2);
        if initial_slope >= NEWTON_MIN_SLOPE {
            self.newton_raphson(x, guess)
        } else if initial_slope == 0.0 {
            guess
        } else {
            self.binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP_SIZE)
        }
    }
}

impl Easing for CubicBezier {
    fn ease(&self, progress: f64) -> f64 {
        if self.is_linear() {
            return progress;
        }
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        calc_bezier(self.t_for_x(x), self.y1, self.y2)
    }
}

impl fmt::Debug for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicBezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// The shared default easing, [`CubicBezier::ease_in_out`].
pub fn default_easing() -> Arc<dyn Easing> {
    static DEFAULT: OnceLock<Arc<dyn Easing>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(CubicBezier::ease_in_out()))
        .clone()
}

/// Look up an easing by name: `ease-in-out` (or `default`), `simple`,
/// `linear`.
pub fn easing_by_name(name: &str) -> Option<Arc<dyn Easing>> {
    match name {
        "default" | "ease-in-out" => Some(default_easing()),
        "simple" => Some(Arc::new(CubicBezier::simple())),
        "linear" => Some(Arc::new(Linear)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn endpoints_are_fixed() {
        for curve in [CubicBezier::ease_in_out(), CubicBezier::simple()] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = CubicBezier::ease_in_out();
        assert_close(curve.ease(0.5), 0.5);
        for p in [0.1, 0.2, 0.3, 0.4] {
            assert_close(curve.ease(p) + curve.ease(1.0 - p), 1.0);
        }
        assert!(curve.ease(0.1) < 0.1);
        assert!(curve.ease(0.9) > 0.9);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let curve = CubicBezier::ease_in_out();
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = curve.ease(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn simple_runs_ahead_of_linear() {
        let curve = CubicBezier::simple();
        assert!(curve.ease(0.5) > 0.5);
    }

    #[test]
    fn linear_control_points_are_identity() {
        let curve = CubicBezier::new(0.3, 0.3, 0.7, 0.7).unwrap();
        assert_eq!(curve.ease(0.37), 0.37);
    }

    #[test]
    fn rejects_out_of_range_x() {
        assert_eq!(CubicBezier::new(1.5, 0.0, 0.5, 1.0), Err(TweenError::InvalidControlPoint(1.5)));
        assert!(CubicBezier::new(0.5, -2.0, 0.5, 3.0).is_ok());
    }

    #[test]
    fn closures_are_easings() {
        let quad = |p: f64| p * p;
        assert_eq!(quad.ease(0.5), 0.25);
        assert!(easing_by_name("linear").is_some());
        assert!(easing_by_name("bounce").is_none());
    }
}
