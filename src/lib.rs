//! 2D geometry for document zones: segments, polygons, containment,
//! overlap and intersection area.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, Result, ZoneGeomError};
pub use geometry::{AngularComparator, BoundingBox2, Polygon, Segment};
pub use math::Point2;
