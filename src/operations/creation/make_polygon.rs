use crate::error::{Result, ShapeError, ValidationPhase};
use crate::geometry::{ClosedPolyline, Polygon, PolygonKind, Polyline, Segment};
use crate::math::{Point2, Tolerance};

use super::shape_check;

/// Builds a validated polygon from an ordered list of vertices.
///
/// Validation runs in two passes:
/// 1. **Admission.** Vertices are appended one at a time. Each new edge
///    `last -> candidate` must not touch any earlier edge except the one it
///    shares a vertex with. The first offending vertex aborts the build.
/// 2. **Closure.** With every vertex admitted, the polygon needs at least
///    three vertices and the closing edge `last -> first` must not touch any
///    edge except its two neighbours.
///
/// The shape check selected by the [`PolygonKind`] runs last.
#[derive(Debug, Clone)]
pub struct MakePolygon {
    points: Vec<Point2>,
    kind: PolygonKind,
    tolerance: Tolerance,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation for a generic polygon.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            kind: PolygonKind::Generic,
            tolerance: Tolerance::default(),
        }
    }

    /// Builder for a triangle: exactly three vertices.
    #[must_use]
    pub fn triangle(points: Vec<Point2>) -> Self {
        Self::new(points).kind(PolygonKind::Triangle)
    }

    /// Builder for a trapezoid: four vertices, exactly one pair of opposite
    /// sides parallel.
    #[must_use]
    pub fn trapezoid(points: Vec<Point2>) -> Self {
        Self::new(points).kind(PolygonKind::Trapezoid)
    }

    /// Builder for a regular polygon given by its vertices: all edges the
    /// same length.
    #[must_use]
    pub fn regular(points: Vec<Point2>) -> Self {
        Self::new(points).kind(PolygonKind::Regular)
    }

    /// Selects the shape check to run after validation.
    #[must_use]
    pub fn kind(mut self, kind: PolygonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the comparison policy for parallel sides and equal edge lengths.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidShape` if two non-adjacent edges touch,
    /// `ShapeError::TooFewVertices` for fewer than three vertices, and the
    /// shape-check errors of the selected kind.
    pub fn execute(&self) -> Result<Polygon> {
        let boundary = admit_vertices(&self.points)?;
        check_closure(&boundary)?;
        shape_check::check(self.kind, boundary.points(), self.tolerance).inspect_err(|err| {
            tracing::debug!(kind = %self.kind, %err, "shape check failed");
        })?;
        Ok(Polygon::from_validated(boundary, self.kind))
    }
}

/// Returns the index of the first accepted edge that the new edge
/// `accepted.last() -> candidate` touches, ignoring the edge that ends at
/// `accepted.last()`.
fn first_blocking_edge(accepted: &[Point2], candidate: &Point2) -> Option<usize> {
    let last = accepted.last()?;
    let new_edge = Segment::new(*last, *candidate);
    accepted
        .windows(2)
        .take(accepted.len().saturating_sub(2))
        .position(|w| new_edge.intersects(&Segment::new(w[0], w[1])))
}

fn admit_vertices(points: &[Point2]) -> std::result::Result<ClosedPolyline, ShapeError> {
    let mut accepted: Vec<Point2> = Vec::with_capacity(points.len());
    for (vertex, candidate) in points.iter().enumerate() {
        if let Some(edge) = first_blocking_edge(&accepted, candidate) {
            tracing::debug!(vertex, edge, "vertex rejected: new edge crosses an earlier edge");
            return Err(ShapeError::InvalidShape {
                phase: ValidationPhase::Admission,
                vertex,
                edge,
            });
        }
        accepted.push(*candidate);
    }
    Ok(ClosedPolyline::from(Polyline::from(accepted)))
}

fn check_closure(boundary: &ClosedPolyline) -> std::result::Result<(), ShapeError> {
    let pts = boundary.points();
    let n = pts.len();
    if n <= 2 {
        tracing::debug!(degree = n, "polygon rejected: too few vertices");
        return Err(ShapeError::TooFewVertices { degree: n });
    }

    // Skip the first edge (shares vertex 0) and the last open edge (shares
    // vertex n - 1).
    let closing = Segment::new(pts[n - 1], pts[0]);
    let crossed = (1..n - 2).find(|&i| closing.intersects(&Segment::new(pts[i], pts[i + 1])));
    if let Some(edge) = crossed {
        tracing::debug!(edge, "polygon rejected: closing edge crosses an earlier edge");
        return Err(ShapeError::InvalidShape {
            phase: ValidationPhase::Closure,
            vertex: n - 1,
            edge,
        });
    }
    Ok(())
}
