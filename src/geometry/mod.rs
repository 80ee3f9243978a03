pub mod closed_polyline;
pub mod polygon;
pub mod polyline;
pub mod segment;

pub use closed_polyline::ClosedPolyline;
pub use polygon::{Polygon, PolygonKind};
pub use polyline::Polyline;
pub use segment::Segment;
