use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::{Polyline, Segment};

/// A polyline whose last vertex connects back to the first.
///
/// Indexing is cyclic: `at(i)` and `at(i + k * len())` name the same vertex
/// for every integer `k`, negative indices included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedPolyline {
    line: Polyline,
}

impl ClosedPolyline {
    /// Creates an empty closed polyline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a closed polyline from a slice of points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            line: Polyline::from_points(points),
        }
    }

    /// Appends a vertex; it becomes the new end of the closing edge.
    pub fn push(&mut self, vertex: Point2) {
        self.line.push(vertex);
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// Number of vertices, which is also the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Returns the vertex at `index` wrapped into `[0, len())`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptySequence` if the polyline is empty.
    pub fn at(&self, index: isize) -> Result<&Point2> {
        // A Vec never holds more than isize::MAX elements.
        match isize::try_from(self.line.len()) {
            Ok(n) if n > 0 => {
                // rem_euclid of a positive modulus is in [0, n).
                #[allow(clippy::cast_sign_loss)]
                let wrapped = index.rem_euclid(n) as usize;
                self.line.get(wrapped)
            }
            _ => Err(GeometryError::EmptySequence { index }.into()),
        }
    }

    /// Vertices in order; the closing edge is implied, not stored.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        self.line.points()
    }

    /// Iterates over the `len()` edges including the closing edge.
    ///
    /// Yields nothing for fewer than two vertices.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let pts = self.line.points();
        let n = if pts.len() < 2 { 0 } else { pts.len() };
        (0..n).map(move |i| Segment::new(pts[i], pts[(i + 1) % n]))
    }

    /// Open length plus the closing edge from the last vertex to the first.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let closing = match (self.line.points().first(), self.line.points().last()) {
            (Some(first), Some(last)) => (first - last).norm(),
            _ => 0.0,
        };
        self.line.length() + closing
    }

    /// Returns the underlying open polyline.
    #[must_use]
    pub fn as_polyline(&self) -> &Polyline {
        &self.line
    }

    /// Consumes the ring and returns the open polyline it wraps.
    #[must_use]
    pub fn into_polyline(self) -> Polyline {
        self.line
    }
}

impl From<Polyline> for ClosedPolyline {
    fn from(line: Polyline) -> Self {
        Self { line }
    }
}

impl FromIterator<Point2> for ClosedPolyline {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            line: iter.into_iter().collect(),
        }
    }
}
