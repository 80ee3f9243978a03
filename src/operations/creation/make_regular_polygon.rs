use std::f64::consts::PI;

use crate::error::{OperationError, Result, ShapeError};
use crate::geometry::{ClosedPolyline, Polygon, PolygonKind};
use crate::math::vector_2d::rotate;
use crate::math::{Point2, Vector2};

/// Generates a regular polygon from its vertex count, side length and center.
///
/// Vertex 0 sits at `center + (s/2, apothem)`; every following vertex is the
/// previous offset rotated counter-clockwise by `2π/n`. Rotations are applied
/// one after the other, so rounding error grows with `n`. The result is not
/// run through self-intersection validation.
///
/// Any finite side length is accepted. A negative side mirrors the polygon
/// through `center` and a zero side collapses every vertex onto it.
pub struct MakeRegularPolygon {
    vertex_count: usize,
    side_length: f64,
    center: Point2,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    #[must_use]
    pub fn new(vertex_count: usize, side_length: f64, center: Point2) -> Self {
        Self {
            vertex_count,
            side_length,
            center,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::TooFewVertices` if `vertex_count < 3` and
    /// `OperationError::InvalidInput` if the side length is NaN or infinite.
    pub fn execute(&self) -> Result<Polygon> {
        let n = self.vertex_count;
        if n <= 2 {
            return Err(ShapeError::TooFewVertices { degree: n }.into());
        }
        if !self.side_length.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "regular polygon side length must be finite, got {}",
                self.side_length
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let nf = n as f64;
        let half = self.side_length / 2.0;
        let apothem = half * ((nf - 2.0) * PI / (2.0 * nf)).tan();
        let step = 2.0 * PI / nf;

        let mut offset = Vector2::new(half, apothem);
        let mut boundary = ClosedPolyline::new();
        boundary.push(self.center + offset);
        for _ in 1..n {
            offset = rotate(&offset, step);
            boundary.push(self.center + offset);
        }

        tracing::trace!(n, side = self.side_length, "generated regular polygon");
        Ok(Polygon::from_validated(boundary, PolygonKind::Regular))
    }
}
