use std::cmp::Ordering;

use crate::math::{is_less_than, Point2, TOLERANCE, VERTICAL_SLOPE};

/// A line segment between two points.
///
/// Zero-length segments are representable but get no special treatment.
/// Equality ignores direction: `(a, b) == (b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Segment {
    /// Creates a new segment from its two endpoints.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns whether the segment's x-extent is below [`TOLERANCE`].
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        (self.p2.x - self.p1.x).abs() < TOLERANCE
    }

    /// Returns `dy / dx`, or [`VERTICAL_SLOPE`] for vertical segments.
    #[must_use]
    pub fn slope(&self) -> f64 {
        if self.is_vertical() {
            return VERTICAL_SLOPE;
        }
        (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x)
    }

    /// Returns whether `point` lies on the segment itself, not just on its
    /// infinite extension.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        if self.is_vertical() {
            return (point.x - self.p1.x).abs() < TOLERANCE && self.in_y_range(point.y);
        }
        let projected_y = self.p1.y + self.slope() * (point.x - self.p1.x);
        if (projected_y - point.y).abs() >= TOLERANCE {
            return false;
        }
        self.in_x_range(point.x) && self.in_y_range(point.y)
    }

    /// Intersects the two segments, returning the crossing point if any.
    ///
    /// The infinite lines are intersected first and the result is accepted
    /// only when it lies within both segments' bounds. Segments of equal
    /// slope never intersect, even when collinear and overlapping, and two
    /// vertical segments never intersect.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> Option<Point2> {
        let self_vertical = self.is_vertical();
        let other_vertical = other.is_vertical();
        if self_vertical && other_vertical {
            return None;
        }

        let m1 = self.slope();
        let m2 = other.slope();
        if (m1 - m2).abs() < TOLERANCE {
            return None;
        }

        let (x, y) = if self_vertical {
            let x = self.p1.x;
            (x, m2 * (x - other.p1.x) + other.p1.y)
        } else if other_vertical {
            let x = other.p1.x;
            (x, m1 * (x - self.p1.x) + self.p1.y)
        } else {
            let b1 = self.p1.y - m1 * self.p1.x;
            let b2 = other.p1.y - m2 * other.p1.x;
            let x = (b2 - b1) / (m1 - m2);
            (x, m1 * x + b1)
        };

        let bounded = self.in_x_range(x)
            && self.in_y_range(y)
            && other.in_x_range(x)
            && other.in_y_range(y);
        bounded.then_some(Point2::new(x, y))
    }

    /// Lexicographic ordering by `(p1, p2)` using tolerant point comparison.
    ///
    /// Endpoints closer than [`TOLERANCE`] compare equal.
    #[must_use]
    pub fn cmp_lexicographic(&self, other: &Segment) -> Ordering {
        cmp_points(&self.p1, &other.p1).then_with(|| cmp_points(&self.p2, &other.p2))
    }

    fn in_x_range(&self, x: f64) -> bool {
        in_range(x, self.p1.x, self.p2.x)
    }

    fn in_y_range(&self, y: f64) -> bool {
        in_range(y, self.p1.y, self.p2.y)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

/// Inclusive range test with [`TOLERANCE`] slack on both ends.
fn in_range(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value >= lo - TOLERANCE && value <= hi + TOLERANCE
}

fn cmp_points(a: &Point2, b: &Point2) -> Ordering {
    if is_less_than(a, b) {
        Ordering::Less
    } else if is_less_than(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn slope_of_diagonal() {
        assert_relative_eq!(seg(0.0, 0.0, 2.0, 4.0).slope(), 2.0);
        assert_relative_eq!(seg(2.0, 4.0, 0.0, 0.0).slope(), 2.0);
    }

    #[test]
    fn slope_of_vertical_is_sentinel() {
        assert_relative_eq!(seg(3.0, 0.0, 3.0, 5.0).slope(), VERTICAL_SLOPE);
        assert_relative_eq!(seg(3.0, 0.0, 3.0 + 1e-9, 5.0).slope(), VERTICAL_SLOPE);
    }

    #[test]
    fn contains_point_on_diagonal() {
        let s = seg(0.0, 0.0, 10.0, 10.0);
        assert!(s.contains(&Point2::new(4.0, 4.0)));
        assert!(s.contains(&Point2::new(0.0, 0.0)));
        assert!(s.contains(&Point2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_rejects_line_extension() {
        let s = seg(0.0, 0.0, 10.0, 10.0);
        assert!(!s.contains(&Point2::new(11.0, 11.0)));
        assert!(!s.contains(&Point2::new(-1.0, -1.0)));
        assert!(!s.contains(&Point2::new(5.0, 5.1)));
    }

    #[test]
    fn contains_on_vertical() {
        let s = seg(2.0, 8.0, 2.0, 1.0);
        assert!(s.contains(&Point2::new(2.0, 4.0)));
        assert!(s.contains(&Point2::new(2.0 + 1e-9, 1.0)));
        assert!(!s.contains(&Point2::new(2.0, 9.0)));
        assert!(!s.contains(&Point2::new(2.1, 4.0)));
    }

    #[test]
    fn crossing_diagonals_meet_in_the_middle() {
        let p = seg(0.0, 0.0, 10.0, 10.0)
            .intersects(&seg(0.0, 10.0, 10.0, 0.0))
            .unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 5.0);
    }

    #[test]
    fn vertical_against_horizontal() {
        let v = seg(4.0, -1.0, 4.0, 3.0);
        let h = seg(0.0, 2.0, 6.0, 2.0);
        let p = v.intersects(&h).unwrap();
        assert_relative_eq!(p.x, 4.0);
        assert_relative_eq!(p.y, 2.0);
        let q = h.intersects(&v).unwrap();
        assert_relative_eq!(q.x, 4.0);
        assert_relative_eq!(q.y, 2.0);
    }

    #[test]
    fn touching_at_endpoint_counts() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        let p = a.intersects(&b).unwrap();
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn lines_crossing_outside_segments() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(3.0, 0.0, 4.0, -1.0);
        assert!(a.intersects(&b).is_none());
    }

    #[test]
    fn two_verticals_never_intersect() {
        assert!(seg(1.0, 0.0, 1.0, 5.0)
            .intersects(&seg(1.0, 2.0, 1.0, 8.0))
            .is_none());
    }

    #[test]
    fn collinear_overlap_is_not_an_intersection() {
        let a = seg(0.0, 0.0, 10.0, 5.0);
        let b = seg(4.0, 2.0, 14.0, 7.0);
        assert!(a.intersects(&b).is_none());
        assert!(b.intersects(&a).is_none());
    }

    #[test]
    fn intersection_accepts_crossing_within_tolerance_of_range() {
        let h = seg(0.0, 0.0, 10.0, 0.0);
        let near = seg(5.0, 5e-9, 5.0, 10.0);
        let p = h.intersects(&near).unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 0.0);

        let short = seg(5.0, 1e-6, 5.0, 10.0);
        assert!(h.intersects(&short).is_none());
        assert!(short.intersects(&h).is_none());
    }

    #[test]
    fn nearly_equal_slopes_are_parallel() {
        // Slopes 1 and 1 + 1e-9 cross at (5, 5), inside both segments.
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, -5e-9, 10.0, 10.0 + 5e-9);
        assert!((a.slope() - b.slope()).abs() > 0.0);
        assert!(a.intersects(&b).is_none());
        assert!(b.intersects(&a).is_none());
    }

    #[test]
    fn contains_within_projection_tolerance() {
        let s = seg(0.0, 0.0, 10.0, 10.0);
        assert!(s.contains(&Point2::new(4.0, 4.0 + 5e-9)));
        assert!(s.contains(&Point2::new(4.0, 4.0 - 5e-9)));
        assert!(!s.contains(&Point2::new(4.0, 4.0 + 1e-6)));
    }

    #[test]
    fn equality_ignores_direction() {
        let a = seg(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a, seg(3.0, 4.0, 1.0, 2.0));
        assert_eq!(a, seg(1.0, 2.0, 3.0, 4.0));
        assert_ne!(a, seg(1.0, 2.0, 3.0, 5.0));
    }

    #[test]
    fn lexicographic_ordering() {
        let a = seg(0.0, 0.0, 5.0, 5.0);
        let b = seg(1.0, 0.0, 2.0, 2.0);
        let c = seg(0.0, 0.0, 5.0, 6.0);
        assert_eq!(a.cmp_lexicographic(&b), Ordering::Less);
        assert_eq!(b.cmp_lexicographic(&a), Ordering::Greater);
        assert_eq!(a.cmp_lexicographic(&c), Ordering::Less);
        assert_eq!(
            a.cmp_lexicographic(&seg(1e-10, 0.0, 5.0, 5.0 + 1e-10)),
            Ordering::Equal
        );
    }
}
