//! # linsys
//!
//! Exact Gaussian elimination over systems of hyperplanes.
//!
//! Each equation is a `Hyperplane` (`normal · x = constant`) with exact
//! rational coefficients. A `LinearSystem` reduces to triangular form and
//! reduced row-echelon form, then reports whether it has a unique solution,
//! none, or an affine family of solutions.
//!
//! ## Crates
//!
//! - [`numeric`]: `ExactScalar` and the global `NumericContext`
//! - [`linalg`]: `Vector` and `Hyperplane`
//! - [`solve`]: `LinearSystem`, `Solution` and `Parametrization`
//!
//! ## Quick Start
//!
//! ```rust
//! use linsys::prelude::*;
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::from_i64s(&[1, 1, 1], 1).unwrap(),
//!     Hyperplane::from_i64s(&[0, 1, 1], 2).unwrap(),
//! ])
//! .unwrap();
//!
//! match system.solve_system().unwrap() {
//!     Solution::Parametrized(p) => assert_eq!(p.free_variable_count(), 1),
//!     other => panic!("unexpected {other}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use linsys_linalg as linalg;
pub use linsys_numeric as numeric;
pub use linsys_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use linsys_linalg::{Hyperplane, LinalgError, Vector};
    pub use linsys_numeric::{ExactScalar, NumericContext, NumericError};
    pub use linsys_solve::{LinearSystem, Parametrization, Solution, SystemError};
}
