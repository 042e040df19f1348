//! # linsys-linalg
//!
//! Vectors and hyperplanes over exact scalars.
//!
//! This crate provides:
//! - `Vector`: fixed-dimension coordinates with the primitives elimination
//!   needs (add, scale, dot, parallel/orthogonal tests, near-zero checks)
//! - `Hyperplane`: a single linear equation with a derived basepoint and
//!   scale-independent coincidence test

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hyperplane;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use error::LinalgError;
pub use hyperplane::Hyperplane;
pub use vector::Vector;
