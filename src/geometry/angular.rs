use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::distance;
use crate::math::{Point2, COINCIDENCE_TOLERANCE, REFERENCE_PSEUDO_ANGLE};

/// Orders points by pseudo-angle around a fixed reference point.
///
/// The pseudo-angle of `p` is `(p.x - ref.x) / |p - ref|`, the cosine of the
/// angle between `p - ref` and the x axis. For points on or above the
/// reference it decreases monotonically with the true angle, which is all a
/// sort needs. Points within [`COINCIDENCE_TOLERANCE`] of the reference get
/// [`REFERENCE_PSEUDO_ANGLE`] so the reference sorts last.
#[derive(Debug, Clone, Copy)]
pub struct AngularComparator {
    reference: Point2,
}

impl AngularComparator {
    #[must_use]
    pub fn new(reference: Point2) -> Self {
        Self { reference }
    }

    #[must_use]
    pub fn reference(&self) -> &Point2 {
        &self.reference
    }

    /// Computes the pseudo-angle of `point` relative to the reference.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::PseudoAngleOutOfRange` if the ratio falls
    /// outside `[-1, 1]`, which only happens for numerically degenerate input.
    pub fn pseudo_angle(&self, point: &Point2) -> Result<f64> {
        let d = distance(point, &self.reference);
        if d <= COINCIDENCE_TOLERANCE {
            return Ok(REFERENCE_PSEUDO_ANGLE);
        }
        let value = (point.x - self.reference.x) / d;
        if !(-1.0..=1.0).contains(&value) {
            return Err(GeometryError::PseudoAngleOutOfRange { value }.into());
        }
        Ok(value)
    }

    /// Compares two points by pseudo-angle.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::pseudo_angle`].
    pub fn compare(&self, a: &Point2, b: &Point2) -> Result<Ordering> {
        Ok(self.pseudo_angle(a)?.total_cmp(&self.pseudo_angle(b)?))
    }

    /// Sorts `points` in place by ascending pseudo-angle.
    ///
    /// The sort is stable, so points with equal pseudo-angles keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::pseudo_angle`]; `points` is left
    /// untouched in that case.
    pub fn sort(&self, points: &mut [Point2]) -> Result<()> {
        let mut keyed = points
            .iter()
            .map(|p| self.pseudo_angle(p).map(|angle| (angle, *p)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (slot, (_, p)) in points.iter_mut().zip(keyed) {
            *slot = p;
        }
        Ok(())
    }
}
