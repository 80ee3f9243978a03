use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::math::polygon_2d::area_2d;
use crate::math::Point2;

use super::{ClosedPolyline, Segment};

/// Which shape check a polygon passed on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonKind {
    #[default]
    Generic,
    Triangle,
    Trapezoid,
    Regular,
}

impl PolygonKind {
    /// Short type tag.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Generic => "...",
            Self::Triangle => "tri",
            Self::Trapezoid => "tpz",
            Self::Regular => "reg",
        }
    }
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "polygon",
            Self::Triangle => "triangle",
            Self::Trapezoid => "trapezoid",
            Self::Regular => "regular polygon",
        })
    }
}

/// A simple polygon: at least three vertices, no two non-adjacent edges
/// touching, closing edge included.
///
/// Values are only produced by the builders in
/// [`operations::creation`](crate::operations::creation) and are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    boundary: ClosedPolyline,
    kind: PolygonKind,
}

impl Polygon {
    /// Wraps an already validated boundary.
    pub(crate) fn from_validated(boundary: ClosedPolyline, kind: PolygonKind) -> Self {
        Self { boundary, kind }
    }

    /// The shape tag checked when the polygon was built.
    #[must_use]
    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    /// Number of vertices.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.boundary.len()
    }

    /// Returns the vertex at `index`, wrapped cyclically.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed polygon; the error path is shared with
    /// [`ClosedPolyline::at`].
    pub fn vertex(&self, index: isize) -> Result<&Point2> {
        self.boundary.at(index)
    }

    /// Vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        self.boundary.points()
    }

    /// Iterates over the `degree()` edges, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.boundary.edges()
    }

    /// Returns the cyclic boundary.
    #[must_use]
    pub fn boundary(&self) -> &ClosedPolyline {
        &self.boundary
    }

    /// Sum of all edge lengths, closing edge included.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.boundary.perimeter()
    }

    /// Enclosed area (shoelace formula); the same for either winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        area_2d(self.boundary.points())
    }

    /// Compares two polygons by area.
    #[must_use]
    pub fn cmp_area(&self, other: &Self) -> Option<Ordering> {
        self.area().partial_cmp(&other.area())
    }
}
