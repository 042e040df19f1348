//! Error types for scalar arithmetic and context setup.

use thiserror::Error;

/// Errors produced by `linsys-numeric`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The input is not an integer, decimal, or `p/q` fraction.
    #[error("cannot parse `{input}` as an exact scalar")]
    ParseScalar {
        /// The rejected input.
        input: String,
    },

    /// A float was NaN or infinite.
    #[error("value is not finite")]
    NotFinite,

    /// A zero denominator or divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value.
    #[error("square root of a negative value")]
    NegativeSqrt,

    /// Precision or tolerance outside their valid range.
    #[error("invalid numeric context: {reason}")]
    InvalidContext {
        /// What was wrong.
        reason: String,
    },

    /// The process-wide context was already set (or already defaulted).
    #[error("a numeric context has already been installed")]
    ContextAlreadyInstalled,

    /// An override variable could not be parsed.
    #[error("environment variable {name} has invalid value `{value}`")]
    InvalidEnvVar {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}
