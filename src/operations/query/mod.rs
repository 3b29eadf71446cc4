mod intersection_area;

pub use intersection_area::IntersectionArea;
