//! Export quality snapping.

/// Output heights an exported video can be rendered at, ascending.
pub const AVAILABLE_QUALITY_HEIGHTS: [u32; 6] = [240, 360, 480, 600, 720, 1080];

/// Fraction of the gap between two neighbouring heights a source must exceed
/// to be promoted to the higher one.
const ALLOWED_THRESHOLD: f64 = 0.8;

/// Snap a source video height to the closest available export height that
/// does not upscale it noticeably.
///
/// A height is promoted to the next step only once it covers more than 80%
/// of the gap to it; anything below the second step falls back to the
/// lowest height.
pub fn snap_to_available_quality(video_height: f64) -> u32 {
    for pair in AVAILABLE_QUALITY_HEIGHTS.windows(2).rev() {
        let (lower, higher) = (f64::from(pair[0]), f64::from(pair[1]));
        if video_height > lower + (higher - lower) * ALLOWED_THRESHOLD {
            return pair[1];
        }
    }
    AVAILABLE_QUALITY_HEIGHTS[0]
}
