//! Error types for linear systems.

use linsys_linalg::LinalgError;
use thiserror::Error;

/// Errors produced by `linsys-solve`.
///
/// An inconsistent system is not an error; it is reported as
/// [`Solution::NoSolution`](crate::Solution::NoSolution).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SystemError {
    /// A system needs at least one equation to fix its dimension.
    #[error("a linear system needs at least one equation")]
    EmptySystem,

    /// An equation or vector lives in the wrong dimension.
    #[error("all planes in the system should live in the same dimension: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The system's dimension.
        expected: usize,
        /// The offending dimension.
        found: usize,
    },

    /// Scaling a row by zero would discard the equation.
    #[error("cannot scale row {row} by zero")]
    InvalidScale {
        /// The row that was to be scaled.
        row: usize,
    },

    /// A row index past the end of the system.
    #[error("row {row} is out of bounds for a system of {len} equations")]
    RowOutOfBounds {
        /// Requested row.
        row: usize,
        /// Number of equations.
        len: usize,
    },

    /// Vector or hyperplane arithmetic failed.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
