use crate::error::ShapeError;
use crate::geometry::{PolygonKind, Segment};
use crate::math::{Point2, Tolerance};

/// Runs the extra check a validated polygon must meet for `kind`.
///
/// The vertices are assumed to have passed self-intersection validation
/// already; the checks only look at counts, parallelism and edge lengths.
///
/// # Errors
///
/// Returns the error of the failing check; `Generic` always passes.
pub fn check(kind: PolygonKind, vertices: &[Point2], tol: Tolerance) -> Result<(), ShapeError> {
    match kind {
        PolygonKind::Generic => Ok(()),
        PolygonKind::Triangle => check_triangle(vertices),
        PolygonKind::Trapezoid => check_trapezoid(vertices, tol),
        PolygonKind::Regular => check_regular(vertices, tol),
    }
}

/// Exactly three vertices.
///
/// # Errors
///
/// Returns `ShapeError::CardinalityMismatch` otherwise.
pub fn check_triangle(vertices: &[Point2]) -> Result<(), ShapeError> {
    expect_degree(PolygonKind::Triangle, vertices, 3)
}

/// Four vertices with exactly one pair of opposite sides parallel.
///
/// A parallelogram has both pairs parallel and is rejected.
///
/// # Errors
///
/// Returns `ShapeError::CardinalityMismatch` for a vertex count other than
/// four and `ShapeError::ConstraintViolation` when zero or two pairs are
/// parallel.
pub fn check_trapezoid(vertices: &[Point2], tol: Tolerance) -> Result<(), ShapeError> {
    expect_degree(PolygonKind::Trapezoid, vertices, 4)?;
    let side = |i: usize| Segment::new(vertices[i], vertices[(i + 1) % 4]);

    let first_pair = tol.is_zero(side(0).cross(&side(2)));
    let second_pair = tol.is_zero(side(1).cross(&side(3)));
    if first_pair == second_pair {
        let reason = if first_pair {
            "both pairs of opposite sides are parallel"
        } else {
            "no pair of opposite sides is parallel"
        };
        return Err(ShapeError::ConstraintViolation {
            kind: PolygonKind::Trapezoid,
            reason: reason.into(),
        });
    }
    Ok(())
}

/// Every edge, closing edge included, as long as the first one.
///
/// # Errors
///
/// Returns `ShapeError::ConstraintViolation` naming the first edge whose
/// length differs.
pub fn check_regular(vertices: &[Point2], tol: Tolerance) -> Result<(), ShapeError> {
    let n = vertices.len();
    if n < 2 {
        return Ok(());
    }
    let length = |i: usize| Segment::new(vertices[i], vertices[(i + 1) % n]).length();
    let expected = length(0);
    match (1..n).find(|&i| !tol.approx_eq(length(i), expected)) {
        Some(edge) => Err(ShapeError::ConstraintViolation {
            kind: PolygonKind::Regular,
            reason: format!(
                "edge {edge} has length {}, edge 0 has length {expected}",
                length(edge)
            ),
        }),
        None => Ok(()),
    }
}

fn expect_degree(kind: PolygonKind, vertices: &[Point2], expected: usize) -> Result<(), ShapeError> {
    if vertices.len() == expected {
        Ok(())
    } else {
        Err(ShapeError::CardinalityMismatch {
            kind,
            expected,
            actual: vertices.len(),
        })
    }
}
