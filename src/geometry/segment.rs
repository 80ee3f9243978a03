use crate::math::intersect_2d::segments_intersect_2d;
use crate::math::vector_2d::{cross, dot};
use crate::math::{Point2, Vector2};

/// A directed line segment from `begin` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    begin: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(begin: Point2, end: Point2) -> Self {
        Self { begin, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn begin(&self) -> &Point2 {
        &self.begin
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the direction vector `end - begin` (not normalized).
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.begin
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Scalar product of the two direction vectors.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        dot(&self.vector(), &other.vector())
    }

    /// Pseudo-scalar product of the two direction vectors.
    ///
    /// Zero iff the segments are parallel (or one of them is degenerate).
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        cross(&self.vector(), &other.vector())
    }

    /// Swaps `begin` and `end` in place.
    pub fn reverse(&mut self) -> &mut Self {
        std::mem::swap(&mut self.begin, &mut self.end);
        self
    }

    /// Returns the segment with `begin` and `end` swapped.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Returns `true` if the two closed segments share at least one point.
    ///
    /// Touching endpoints and collinear overlaps count. Symmetric in its
    /// arguments.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        segments_intersect_2d(&self.begin, &self.end, &other.begin, &other.end)
    }
}
