use crate::geometry::Polygon;

/// Sorts polygons into reading order (left to right, then top to bottom)
/// using [`Polygon::compare_by_bounding_box`].
///
/// The sort is stable, so polygons with identical bounding boxes keep their
/// input order.
pub fn sort_reading_order(polygons: &mut [Polygon]) {
    polygons.sort_by(Polygon::compare_by_bounding_box);
}
