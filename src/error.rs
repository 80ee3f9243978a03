use std::fmt;

use thiserror::Error;

use crate::geometry::PolygonKind;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to vertex containers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range for a sequence of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot take cyclic index {index} of an empty sequence")]
    EmptySequence { index: isize },
}

/// The validation pass that rejected a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPhase {
    /// A vertex was being appended and its new edge crossed an earlier edge.
    Admission,
    /// All vertices were admitted but the closing edge crossed an earlier edge.
    Closure,
}

impl fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admission => f.write_str("admission"),
            Self::Closure => f.write_str("closure"),
        }
    }
}

/// Errors raised while building a polygon or one of its specializations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Two non-adjacent edges cross.
    ///
    /// `vertex` is the start of the offending new edge (for
    /// [`ValidationPhase::Admission`] the candidate vertex itself), `edge` is
    /// the index of the existing edge `vertex[edge] -> vertex[edge + 1]` it
    /// crosses.
    #[error("points do not form a polygon: {phase} check failed at vertex {vertex} (crosses edge {edge})")]
    InvalidShape {
        phase: ValidationPhase,
        vertex: usize,
        edge: usize,
    },

    #[error("points do not form a polygon: degree {degree} is below 3")]
    TooFewVertices { degree: usize },

    #[error("a {kind} needs {expected} vertices, got {actual}")]
    CardinalityMismatch {
        kind: PolygonKind,
        expected: usize,
        actual: usize,
    },

    #[error("points do not form a {kind}: {reason}")]
    ConstraintViolation { kind: PolygonKind, reason: String },
}

/// Errors related to operation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
