use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Segment;

/// An open chain of vertices joined by straight segments.
///
/// Insertion order is significant and duplicate vertices are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<Point2>,
}

impl Polyline {
    /// Creates an empty polyline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyline from a slice of points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            vertices: points.to_vec(),
        }
    }

    /// Appends a vertex at the end.
    pub fn push(&mut self, vertex: Point2) {
        self.vertices.push(vertex);
    }

    /// Replaces all vertices with `points`.
    pub fn replace<I: IntoIterator<Item = Point2>>(&mut self, points: I) {
        self.vertices.clear();
        self.vertices.extend(points);
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Point2> {
        self.vertices.get(index).ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            }
            .into()
        })
    }

    /// Vertices in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.vertices
    }

    /// Iterates over the vertices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.vertices.iter()
    }

    /// Iterates over the `len() - 1` segments between consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Sum of the distances between consecutive vertices; `0.0` for fewer
    /// than two vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}

impl From<Vec<Point2>> for Polyline {
    fn from(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<Point2> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point2> for Polyline {
    fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
