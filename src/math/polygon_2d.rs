use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Returns `0.0`
/// for fewer than three points.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned shoelace area, independent of winding direction.
#[must_use]
pub fn area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Returns the index of the vertex with the smallest `y`.
///
/// Ties keep the earliest vertex. Returns `None` for an empty slice.
#[must_use]
pub fn lowest_vertex_index(points: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, pt) in points.iter().enumerate() {
        match best {
            Some(b) if pt.y >= points[b].y => {}
            _ => best = Some(i),
        }
    }
    best
}
