//! Linear interpolation helpers.

/// Interpolates between `min` and `max` at `progress` (0 → `min`, 1 → `max`).
///
/// Progress outside `[0, 1]` extrapolates.
///
/// # Examples
///
/// ```
/// use media_editor_util::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
/// ```
pub fn lerp(min: f64, max: f64, progress: f64) -> f64 {
    min + (max - min) * progress
}

/// Component-wise [`lerp`].
///
/// Components are paired positionally; the result is as long as the shorter
/// input.
pub fn lerp_array(min: &[f64], max: &[f64], progress: f64) -> Vec<f64> {
    min.iter()
        .zip(max)
        .map(|(&start, &end)| lerp(start, end, progress))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_lerp_array() {
        assert_eq!(lerp_array(&[0.0, 0.0], &[10.0, 20.0], 0.5), vec![5.0, 10.0]);
        assert_eq!(lerp_array(&[255.0, 0.0, 0.0], &[0.0, 0.0, 255.0], 1.0), vec![0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_lerp_array_empty() {
        assert!(lerp_array(&[], &[], 0.3).is_empty());
    }
}
