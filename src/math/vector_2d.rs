use super::{Point2, Vector2};

/// Component-wise sum of two points.
#[must_use]
pub fn add_points(a: &Point2, b: &Point2) -> Point2 {
    Point2::new(a.x + b.x, a.y + b.y)
}

/// Component-wise difference of two points, kept as a point.
///
/// Use `a - b` when a [`Vector2`] is wanted.
#[must_use]
pub fn sub_points(a: &Point2, b: &Point2) -> Point2 {
    Point2::new(a.x - b.x, a.y - b.y)
}

/// Scalar (dot) product.
#[must_use]
pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Pseudo-scalar (2D cross) product `ax * by - bx * ay`.
///
/// Twice the signed area of the triangle `(0, a, b)`: positive when `b` is
/// counter-clockwise from `a`, zero when the vectors are parallel.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    let (sn, cs) = angle.sin_cos();
    Vector2::new(v.x * cs - v.y * sn, v.x * sn + v.y * cs)
}
