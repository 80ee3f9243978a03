mod make_polygon;
mod make_regular_polygon;
pub mod shape_check;

pub use make_polygon::MakePolygon;
pub use make_regular_polygon::MakeRegularPolygon;
