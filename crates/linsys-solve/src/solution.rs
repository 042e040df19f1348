//! Classification of a system's solution set.

use std::fmt;

use linsys_linalg::Vector;

use crate::parametrization::Parametrization;

/// The outcome of [`LinearSystem::solve_system`](crate::LinearSystem::solve_system).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Solution {
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// Some equation reduced to `0 = k` with `k` not near zero.
    NoSolution,
    /// An affine family with at least one free variable.
    Parametrized(Parametrization),
}

impl Solution {
    /// True unless the system is inconsistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Self::NoSolution)
    }

    /// The point of a unique solution.
    #[must_use]
    pub fn unique_point(&self) -> Option<&Vector> {
        match self {
            Self::Unique(point) => Some(point),
            _ => None,
        }
    }

    /// The parametrization of an underdetermined solution.
    #[must_use]
    pub fn parametrization(&self) -> Option<&Parametrization> {
        match self {
            Self::Parametrized(parametrization) => Some(parametrization),
            _ => None,
        }
    }

    /// Number of free variables, or `None` when there is no solution.
    #[must_use]
    pub fn free_variable_count(&self) -> Option<usize> {
        match self {
            Self::Unique(_) => Some(0),
            Self::NoSolution => None,
            Self::Parametrized(parametrization) => Some(parametrization.free_variable_count()),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique(point) => write!(f, "Unique solution: {point}"),
            Self::NoSolution => write!(f, "No solutions"),
            Self::Parametrized(parametrization) => {
                write!(f, "Infinitely many solutions:\n{parametrization}")
            }
        }
    }
}
