//! Error types for vector and hyperplane operations.

use linsys_numeric::NumericError;
use thiserror::Error;

/// Errors produced by `linsys-linalg`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operands live in different dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        expected: usize,
        /// Dimension of the right operand.
        found: usize,
    },

    /// A vector needs at least one coordinate.
    #[error("the coordinates must be nonempty")]
    EmptyVector,

    /// Every coordinate is near zero.
    #[error("no nonzero elements found")]
    NoNonzeroElements,

    /// The zero vector has no direction.
    #[error("cannot normalize the zero vector")]
    ZeroVector,

    /// Scalar arithmetic failed.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}
