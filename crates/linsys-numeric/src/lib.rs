//! # linsys-numeric
//!
//! Exact scalar arithmetic for linsys.
//!
//! This crate wraps `dashu` rationals to provide:
//! - `ExactScalar`, an exact rational with decimal parsing and rendering
//! - `NumericContext`, the process-wide precision and near-zero tolerance
//!
//! ## Near-zero tests
//!
//! Elimination never compares scalars against zero with `==`. Every pivot and
//! degeneracy test goes through [`ExactScalar::is_near_zero`], which uses the
//! tolerance of the global context (`1e-10` unless configured otherwise).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use context::NumericContext;
pub use error::NumericError;
pub use scalar::ExactScalar;
