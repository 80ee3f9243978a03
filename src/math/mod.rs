pub mod intersect_2d;
pub mod polygon_2d;
pub mod tolerance;
pub mod vector_2d;

pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

