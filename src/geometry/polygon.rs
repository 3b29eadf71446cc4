use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{area_2d, lowest_vertex_index};
use crate::math::{points_coincide, Point2};
use crate::operations::query::IntersectionArea;

use super::{AngularComparator, BoundingBox2, Segment};

/// A closed polygon built up vertex by vertex.
///
/// The last vertex connects back to the first. The bounding box is kept
/// tight incrementally by [`Polygon::add_point`]. A polygon with fewer than
/// three vertices is a valid value, but every edge-based query on it fails
/// with `GeometryError::PolygonTooSmall`.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    vertices: Vec<Point2>,
    bbox: BoundingBox2,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon by adding each point in order.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut polygon = Self::new();
        for p in points {
            polygon.add_point(p);
        }
        polygon
    }

    /// Creates the axis-aligned rectangle spanned by `min` and `max`,
    /// counter-clockwise starting at `min`.
    #[must_use]
    pub fn from_corners(min: Point2, max: Point2) -> Self {
        Self::from_points([
            min,
            Point2::new(max.x, min.y),
            max,
            Point2::new(min.x, max.y),
        ])
    }

    /// Appends a vertex and grows the bounding box to include it.
    pub fn add_point(&mut self, p: Point2) {
        if self.vertices.is_empty() {
            self.bbox = BoundingBox2::EMPTY;
        }
        self.vertices.push(p);
        self.bbox.include(&p);
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the bounding box, or `None` while the polygon has no vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        (!self.vertices.is_empty()).then_some(self.bbox)
    }

    /// Returns the edges, one per consecutive vertex pair, the last wrapping
    /// back to the first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` for fewer than 3 vertices.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeometryError::PolygonTooSmall { vertices: n }.into());
        }
        Ok((0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect())
    }

    /// Tests whether `point` is inside the polygon.
    ///
    /// A point on any edge yields `value_if_on_border`. Otherwise two rays
    /// are cast, one horizontally to the bounding box's `max_x` and one
    /// vertically to its `max_y`, and the point is inside only when both
    /// hit the boundary an odd number of times.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` for fewer than 3 vertices.
    pub fn encloses(&self, point: &Point2, value_if_on_border: bool) -> Result<bool> {
        let segments = self.segments()?;
        Ok(self.encloses_with(&segments, point, value_if_on_border))
    }

    fn encloses_with(
        &self,
        segments: &[Segment],
        point: &Point2,
        value_if_on_border: bool,
    ) -> bool {
        if segments.iter().any(|s| s.contains(point)) {
            return value_if_on_border;
        }

        let horizontal = Segment::new(*point, Point2::new(self.bbox.max_x, point.y));
        let vertical = Segment::new(*point, Point2::new(point.x, self.bbox.max_y));

        let h = distinct_crossings(&horizontal, segments);
        let v = distinct_crossings(&vertical, segments);
        h % 2 == 1 && v % 2 == 1
    }

    /// Returns whether every vertex of `other` is enclosed by `self`,
    /// boundary included.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` if `self` has fewer than 3 vertices.
    pub fn contains(&self, other: &Polygon) -> Result<bool> {
        let segments = self.segments()?;
        Ok(other
            .vertices
            .iter()
            .all(|v| self.encloses_with(&segments, v, true)))
    }

    /// Returns whether the two polygons share any area or boundary point:
    /// an edge crossing, or one containing the other.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` if either polygon has fewer
    /// than 3 vertices.
    pub fn overlaps(&self, other: &Polygon) -> Result<bool> {
        let ours = self.segments()?;
        let theirs = other.segments()?;
        let crossing = ours
            .iter()
            .any(|a| theirs.iter().any(|b| a.intersects(b).is_some()));
        if crossing {
            return Ok(true);
        }
        Ok(self.contains(other)? || other.contains(self)?)
    }

    /// Returns the unsigned area (shoelace formula).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` for fewer than 3 vertices.
    pub fn area(&self) -> Result<f64> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeometryError::PolygonTooSmall { vertices: n }.into());
        }
        Ok(area_2d(&self.vertices))
    }

    /// Returns the area shared by `self` and `other`.
    ///
    /// See [`IntersectionArea`] for the algorithm and its limits.
    ///
    /// # Errors
    ///
    /// Returns an error if either polygon has fewer than 3 vertices or the
    /// candidate points cannot be ordered.
    pub fn intersection_area(&self, other: &Polygon) -> Result<f64> {
        IntersectionArea::new(self, other).execute()
    }

    /// Sorts the vertices by pseudo-angle around the lowest-`y` vertex.
    ///
    /// For a point set that surrounds a convex region this yields a simple
    /// walk suitable for the shoelace formula. Collinear and duplicate points
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PseudoAngleOutOfRange` on degenerate input.
    pub(crate) fn reorder_points(&mut self) -> Result<()> {
        let Some(lowest) = lowest_vertex_index(&self.vertices) else {
            return Ok(());
        };
        let reference = self.vertices[lowest];
        tracing::trace!(x = reference.x, y = reference.y, "reorder reference");
        AngularComparator::new(reference).sort(&mut self.vertices)
    }

    /// Orders polygons left to right, then top to bottom, by bounding box.
    ///
    /// Keys in order: `min_x` ascending, `max_y` descending, `max_x`
    /// ascending, `min_y` descending.
    #[must_use]
    pub fn compare_by_bounding_box(&self, other: &Polygon) -> Ordering {
        let (a, b) = (&self.bbox, &other.bbox);
        cmp_f64(a.min_x, b.min_x)
            .then_with(|| cmp_f64(b.max_y, a.max_y))
            .then_with(|| cmp_f64(a.max_x, b.max_x))
            .then_with(|| cmp_f64(b.min_y, a.min_y))
    }
}

impl PartialEq for Polygon {
    /// Order-independent: same vertex count, and every vertex of each polygon
    /// coincides with some vertex of the other within [`TOLERANCE`](crate::math::TOLERANCE).
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && covers(&self.vertices, &other.vertices)
            && covers(&other.vertices, &self.vertices)
    }
}

impl FromIterator<Point2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

fn covers(a: &[Point2], b: &[Point2]) -> bool {
    a.iter().all(|p| b.iter().any(|q| points_coincide(p, q)))
}

/// Counts the distinct points where `ray` hits `edges`.
///
/// A ray through a vertex hits both adjacent edges at the same point; it
/// counts once.
fn distinct_crossings(ray: &Segment, edges: &[Segment]) -> usize {
    let mut hits: Vec<Point2> = Vec::new();
    for edge in edges {
        if let Some(p) = ray.intersects(edge) {
            if !hits.iter().any(|h| points_coincide(h, &p)) {
                hits.push(p);
            }
        }
    }
    hits.len()
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
