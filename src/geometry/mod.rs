mod angular;
mod bbox;
mod polygon;
mod segment;

pub use angular::AngularComparator;
pub use bbox::BoundingBox2;
pub use polygon::Polygon;
pub use segment::Segment;
