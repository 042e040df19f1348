//! Systems of linear equations and Gaussian elimination.
//!
//! The elimination routines never edit a [`Hyperplane`] in place. Every row
//! operation builds a new equation and stores it at the row's position, and
//! `compute_*` work on a clone, so the input system is left untouched.
//!
//! ## Pipeline
//!
//! 1. [`LinearSystem::compute_triangular_form`]: swaps and row combinations
//!    only, producing strictly increasing pivots with zero rows last.
//! 2. [`LinearSystem::compute_rref`]: scales each pivot to 1 and clears every
//!    other entry of the pivot columns.
//! 3. [`LinearSystem::solve_system`]: reads the RREF pivot structure.

use std::fmt;
use std::ops::Index;

use linsys_linalg::{Hyperplane, Vector};
use linsys_numeric::ExactScalar;
use num_traits::{One, Zero};

use crate::error::SystemError;
use crate::parametrization::Parametrization;
use crate::solution::Solution;

/// An ordered list of equations sharing one dimension.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system; all planes must share the first plane's dimension.
    pub fn new(planes: Vec<Hyperplane>) -> Result<Self, SystemError> {
        let dimension = planes
            .first()
            .ok_or(SystemError::EmptySystem)?
            .dimension();
        if let Some(plane) = planes.iter().find(|p| p.dimension() != dimension) {
            return Err(SystemError::DimensionMismatch {
                expected: dimension,
                found: plane.dimension(),
            });
        }
        Ok(Self { planes, dimension })
    }

    /// Number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always false: construction rejects empty systems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Number of unknowns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The equations in row order.
    #[must_use]
    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    /// The equation at `row`, if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Hyperplane> {
        self.planes.get(row)
    }

    fn check_row(&self, row: usize) -> Result<(), SystemError> {
        if row < self.planes.len() {
            Ok(())
        } else {
            Err(SystemError::RowOutOfBounds {
                row,
                len: self.planes.len(),
            })
        }
    }

    /// Replaces the equation at `row`.
    pub fn set_row(&mut self, row: usize, plane: Hyperplane) -> Result<(), SystemError> {
        self.check_row(row)?;
        if plane.dimension() != self.dimension {
            return Err(SystemError::DimensionMismatch {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[row] = plane;
        Ok(())
    }

    /// Exchanges two equations.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), SystemError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        tracing::trace!(row1, row2, "swap rows");
        self.planes.swap(row1, row2);
        Ok(())
    }

    /// Multiplies both sides of equation `row` by `coefficient`.
    ///
    /// Only an exactly zero coefficient is rejected. The reciprocal of a large
    /// pivot can be smaller than the tolerance and is still a valid scale.
    pub fn scale_row(&mut self, coefficient: &ExactScalar, row: usize) -> Result<(), SystemError> {
        self.check_row(row)?;
        if coefficient.is_zero() {
            return Err(SystemError::InvalidScale { row });
        }
        tracing::trace!(row, %coefficient, "scale row");
        self.planes[row] = self.planes[row].scaled(coefficient);
        Ok(())
    }

    /// Replaces equation `target` with `target + coefficient * source`.
    pub fn add_scaled_row_to_row(
        &mut self,
        coefficient: &ExactScalar,
        source: usize,
        target: usize,
    ) -> Result<(), SystemError> {
        self.check_row(source)?;
        self.check_row(target)?;
        tracing::trace!(source, target, %coefficient, "add scaled row");
        let combined = self.planes[target].plus_scaled(coefficient, &self.planes[source])?;
        self.planes[target] = combined;
        Ok(())
    }

    /// The pivot coordinate of each row, `None` for rows with a zero normal.
    #[must_use]
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.planes.iter().map(Hyperplane::pivot_index).collect()
    }

    /// Row-echelon form using only swaps and row combinations.
    ///
    /// Pivot indices are recomputed before every step, since eliminating a
    /// row can push its pivot right or zero it out entirely.
    pub fn compute_triangular_form(&self) -> Result<Self, SystemError> {
        tracing::debug!(
            rows = self.len(),
            dimension = self.dimension,
            "computing triangular form"
        );
        let mut system = self.clone();
        let rows = system.len();

        for row in 0..rows.saturating_sub(1) {
            let pivots = system.pivot_indices();
            if let Some(candidate) = first_smallest_pivot(&pivots, row + 1) {
                let smallest = pivots[candidate];
                // A missing pivot sorts after every real one.
                let is_smaller = match (smallest, pivots[row]) {
                    (Some(below), Some(current)) => below < current,
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                if is_smaller {
                    system.swap_rows(row, candidate)?;
                }
            }

            // Nothing below has a pivot either.
            let Some(pivot) = system.planes[row].pivot_index() else {
                break;
            };

            for below in row + 1..rows {
                if system.planes[below].pivot_index() != Some(pivot) {
                    continue;
                }
                let beta = -(&system.planes[below].normal()[pivot]
                    / &system.planes[row].normal()[pivot]);
                system.add_scaled_row_to_row(&beta, row, below)?;
            }
        }

        tracing::debug!(pivots = ?system.pivot_indices(), "triangular form computed");
        Ok(system)
    }

    /// Reduced row-echelon form.
    ///
    /// Starting from the triangular form, each pivot row is scaled so its
    /// pivot is 1, then every entry to the right of the pivot that sits in
    /// another row's pivot column is cleared with that row. Rows below the
    /// current one are untouched at that point, so their pivots are still
    /// nonzero when used.
    pub fn compute_rref(&self) -> Result<Self, SystemError> {
        let mut system = self.compute_triangular_form()?;
        let pivots = system.pivot_indices();
        tracing::debug!(?pivots, "computing rref");

        for (row, pivot) in pivots.iter().enumerate() {
            let Some(pivot) = *pivot else {
                continue;
            };

            let scale = system.planes[row].normal()[pivot]
                .recip()
                .ok_or(SystemError::InvalidScale { row })?;
            system.scale_row(&scale, row)?;

            for col in pivot + 1..system.dimension {
                let Some(other) = pivots.iter().position(|&p| p == Some(col)) else {
                    continue;
                };
                let coefficient = &system.planes[row].normal()[col];
                if coefficient.is_near_zero() {
                    continue;
                }
                let beta = -(coefficient / &system.planes[other].normal()[col]);
                system.add_scaled_row_to_row(&beta, other, row)?;
            }
        }

        tracing::debug!(pivots = ?system.pivot_indices(), "rref computed");
        Ok(system)
    }

    /// Number of equations with a pivot after reduction.
    pub fn rank(&self) -> Result<usize, SystemError> {
        Ok(self
            .compute_rref()?
            .pivot_indices()
            .iter()
            .filter(|p| p.is_some())
            .count())
    }

    /// Classifies the solution set and, when it is nonempty, describes it.
    pub fn solve_system(&self) -> Result<Solution, SystemError> {
        let rref = self.compute_rref()?;
        let pivots = rref.pivot_indices();

        let inconsistent = rref
            .planes
            .iter()
            .zip(&pivots)
            .any(|(plane, pivot)| pivot.is_none() && !plane.constant().is_near_zero());
        if inconsistent {
            tracing::debug!("system is inconsistent");
            return Ok(Solution::NoSolution);
        }

        let mut basepoint = Vector::zeros(self.dimension)?;
        for (plane, pivot) in rref.planes.iter().zip(&pivots) {
            if let Some(pivot) = *pivot {
                basepoint = basepoint.with_coordinate(pivot, plane.constant().clone());
            }
        }

        let free_variables: Vec<usize> = (0..self.dimension)
            .filter(|col| !pivots.contains(&Some(*col)))
            .collect();
        tracing::debug!(?free_variables, "solved system");

        if free_variables.is_empty() {
            return Ok(Solution::Unique(basepoint));
        }

        let directions = free_variables
            .iter()
            .map(|&free| {
                rref.planes.iter().zip(&pivots).fold(
                    basepoint.zeros_like().with_coordinate(free, ExactScalar::one()),
                    |direction, (plane, pivot)| match *pivot {
                        Some(pivot) => direction.with_coordinate(pivot, -&plane.normal()[free]),
                        None => direction,
                    },
                )
            })
            .collect();

        Ok(Solution::Parametrized(Parametrization::new(
            basepoint, directions,
        )?))
    }

    /// True if both systems have the same length and every pair of rows
    /// describes the same plane.
    pub fn coincides_with(&self, other: &Self) -> Result<bool, SystemError> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (own, theirs) in self.planes.iter().zip(&other.planes) {
            if !own.coincides_with(theirs)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// The first row at or after `start` holding the smallest pivot index.
fn first_smallest_pivot(pivots: &[Option<usize>], start: usize) -> Option<usize> {
    pivots
        .iter()
        .enumerate()
        .skip(start)
        .filter_map(|(row, pivot)| pivot.map(|p| (row, p)))
        .min_by_key(|&(_, p)| p)
        .map(|(row, _)| row)
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, row: usize) -> &Self::Output {
        &self.planes[row]
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, plane) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: {plane}", i + 1)?;
        }
        Ok(())
    }
}
