//! # linsys-solve
//!
//! Systems of linear equations solved by exact Gaussian elimination.
//!
//! This crate provides:
//! - `LinearSystem`: an ordered list of hyperplanes with the elementary row
//!   operations (swap, scale, add a multiple of one row to another)
//! - Triangular form and reduced row-echelon form
//! - `solve_system`, which classifies the solution set as a unique point, no
//!   solution, or a `Parametrization` with one direction per free variable
//!
//! ## Example
//!
//! ```rust
//! use linsys_linalg::Hyperplane;
//! use linsys_solve::{LinearSystem, Solution};
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::from_i64s(&[1, 1, 1], 1).unwrap(),
//!     Hyperplane::from_i64s(&[0, 1, 0], 2).unwrap(),
//!     Hyperplane::from_i64s(&[1, 1, -1], 3).unwrap(),
//! ])
//! .unwrap();
//!
//! let solution = system.solve_system().unwrap();
//! assert!(matches!(solution, Solution::Unique(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod linear_system;
pub mod parametrization;
pub mod solution;

#[cfg(test)]
mod proptests;

pub use error::SystemError;
pub use linear_system::LinearSystem;
pub use parametrization::Parametrization;
pub use solution::Solution;
