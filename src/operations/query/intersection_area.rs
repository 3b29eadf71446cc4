use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::TOLERANCE;

/// Computes the area shared by two polygons.
///
/// Candidate points are gathered from the vertices of each polygon that lie
/// inside (or on the border of) the other, plus every edge-edge crossing.
/// The candidates are sorted by pseudo-angle around the lowest one and
/// measured with the shoelace formula. This is exact for convex inputs
/// such as axis-aligned zones; it is not a general clipping algorithm.
///
/// Candidates are not deduplicated, and collinear overlapping edges
/// contribute no crossing points.
pub struct IntersectionArea<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
}

impl<'a> IntersectionArea<'a> {
    /// Creates a new `IntersectionArea` query.
    #[must_use]
    pub fn new(subject: &'a Polygon, clip: &'a Polygon) -> Self {
        Self { subject, clip }
    }

    /// Executes the query, returning the shared area.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PolygonTooSmall` if either polygon has fewer
    /// than 3 vertices, or `GeometryError::PseudoAngleOutOfRange` if the
    /// candidate points cannot be ordered.
    pub fn execute(&self) -> Result<f64> {
        let mut scratch = self.candidates()?;
        if scratch.len() <= 2 {
            tracing::debug!(candidates = scratch.len(), "no intersection area");
            return Ok(0.0);
        }
        scratch.reorder_points()?;
        let area = scratch.area()?;
        tracing::debug!(candidates = scratch.len(), area, "intersection area");
        Ok(area)
    }

    /// Returns the fraction of the clip polygon's area covered by the subject.
    ///
    /// A clip polygon with an area below [`TOLERANCE`] reports `0.0`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub fn coverage(&self) -> Result<f64> {
        let clip_area = self.clip.area()?;
        if clip_area < TOLERANCE {
            return Ok(0.0);
        }
        Ok(self.execute()? / clip_area)
    }

    fn candidates(&self) -> Result<Polygon> {
        let (this, other) = (self.subject, self.clip);
        let mut scratch = Polygon::new();

        for v in other.vertices() {
            if this.encloses(v, true)? {
                scratch.add_point(*v);
            }
        }
        let from_other = scratch.len();

        for v in this.vertices() {
            if other.encloses(v, true)? {
                scratch.add_point(*v);
            }
        }
        let from_this = scratch.len() - from_other;

        let theirs = other.segments()?;
        for a in this.segments()? {
            for b in &theirs {
                if let Some(p) = a.intersects(b) {
                    scratch.add_point(p);
                }
            }
        }
        tracing::trace!(
            from_other,
            from_this,
            crossings = scratch.len() - from_other - from_this,
            "intersection candidates"
        );

        Ok(scratch)
    }
}
