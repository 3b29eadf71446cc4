pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance for coordinate, slope and range comparisons.
pub const TOLERANCE: f64 = 1e-8;

/// Distance below which a point is treated as the angular reference point itself.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-5;

/// Slope reported for vertical segments.
pub const VERTICAL_SLOPE: f64 = f64::MAX;

/// Pseudo-angle assigned to points coincident with the reference point.
///
/// Larger than any real pseudo-angle, so the reference sorts last.
pub const REFERENCE_PSEUDO_ANGLE: f64 = 2.0;

/// Returns whether both coordinates of `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Tolerant lexicographic "less than": compares `x` first, then `y`.
///
/// Differences below [`TOLERANCE`] count as equal, never as less.
#[must_use]
pub fn is_less_than(a: &Point2, b: &Point2) -> bool {
    if (a.x - b.x).abs() >= TOLERANCE {
        return a.x < b.x;
    }
    if (a.y - b.y).abs() >= TOLERANCE {
        return a.y < b.y;
    }
    false
}
