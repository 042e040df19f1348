//! Hyperplanes: one linear equation `normal · x = constant`.
//!
//! A hyperplane is immutable. Operations that change the equation, such as
//! [`Hyperplane::scaled`] and [`Hyperplane::plus_scaled`], build a new value,
//! so a system of equations can replace rows without aliasing.

use std::fmt;

use linsys_numeric::ExactScalar;
use num_traits::{One, Zero};

use crate::error::LinalgError;
use crate::vector::Vector;

/// Fractional digits shown for coefficients in `Display`.
const DISPLAY_PLACES: usize = 3;

/// The equation `normal · x = constant`.
///
/// `PartialEq` is exact structural equality. Use
/// [`Hyperplane::coincides_with`] to compare the point sets, which does not
/// depend on how the equation is scaled.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hyperplane {
    normal: Vector,
    constant: ExactScalar,
    /// A point on the plane, or `None` when `normal` is (near) zero.
    basepoint: Option<Vector>,
}

impl Hyperplane {
    /// Creates the hyperplane `normal · x = constant`.
    #[must_use]
    pub fn new(normal: Vector, constant: ExactScalar) -> Self {
        let basepoint = Self::first_nonzero_index(normal.coordinates())
            .ok()
            .map(|k| {
                let coordinate = &constant / &normal[k];
                normal.zeros_like().with_coordinate(k, coordinate)
            });
        Self {
            normal,
            constant,
            basepoint,
        }
    }

    /// Creates a hyperplane from integer coefficients.
    pub fn from_i64s(normal: &[i64], constant: i64) -> Result<Self, LinalgError> {
        Ok(Self::new(
            Vector::from_i64s(normal)?,
            ExactScalar::from_i64(constant),
        ))
    }

    /// The degenerate equation `0 = 0` in the given dimension.
    pub fn zero(dimension: usize) -> Result<Self, LinalgError> {
        Ok(Self::new(Vector::zeros(dimension)?, ExactScalar::zero()))
    }

    /// Index of the first coordinate that is not near zero.
    pub fn first_nonzero_index(coordinates: &[ExactScalar]) -> Result<usize, LinalgError> {
        coordinates
            .iter()
            .position(|x| !x.is_near_zero())
            .ok_or(LinalgError::NoNonzeroElements)
    }

    /// The pivot coordinate of this equation, or `None` for a zero normal.
    #[must_use]
    pub fn pivot_index(&self) -> Option<usize> {
        Self::first_nonzero_index(self.normal.coordinates()).ok()
    }

    /// The normal vector.
    #[must_use]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    /// The constant term.
    #[must_use]
    pub fn constant(&self) -> &ExactScalar {
        &self.constant
    }

    /// A point on the plane: `constant / normal[k]` at the pivot `k`, zero
    /// elsewhere.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    /// The same equation with both sides multiplied by `c`.
    #[must_use]
    pub fn scaled(&self, c: &ExactScalar) -> Self {
        Self::new(self.normal.scale(c), &self.constant * c)
    }

    /// The equation `self + c * other`.
    pub fn plus_scaled(&self, c: &ExactScalar, other: &Self) -> Result<Self, LinalgError> {
        let normal = self.normal.add(&other.normal.scale(c))?;
        Ok(Self::new(normal, &self.constant + &(&other.constant * c)))
    }

    /// True if the normal vectors are parallel.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, LinalgError> {
        self.normal.is_parallel(&other.normal)
    }

    /// True if both equations describe the same set of points.
    pub fn coincides_with(&self, other: &Self) -> Result<bool, LinalgError> {
        if !self.is_parallel(other)? {
            return Ok(false);
        }
        match (&self.basepoint, &other.basepoint) {
            (None, None) => Ok(true),
            (Some(own), Some(theirs)) => theirs.subtract(own)?.is_orthogonal(&self.normal),
            _ => Ok(false),
        }
    }

    /// Evaluates the left-hand side `normal · point`.
    pub fn evaluate(&self, point: &Vector) -> Result<ExactScalar, LinalgError> {
        self.normal.dot(point)
    }

    /// True if `point` satisfies the equation within the tolerance.
    pub fn is_satisfied_by(&self, point: &Vector) -> Result<bool, LinalgError> {
        Ok((self.evaluate(point)? - &self.constant).is_near_zero())
    }
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_term = false;
        for (i, coefficient) in self.normal.iter().enumerate() {
            let rounded = coefficient.round_to_places(DISPLAY_PLACES);
            if rounded.is_zero() {
                continue;
            }
            if wrote_term {
                let sign = if rounded.is_negative() { '-' } else { '+' };
                write!(f, " {sign} ")?;
            } else if rounded.is_negative() {
                write!(f, "-")?;
            }
            let magnitude = rounded.abs();
            if !magnitude.is_one() {
                write!(f, "{}", magnitude.to_decimal_string(DISPLAY_PLACES))?;
            }
            write!(f, "x_{}", i + 1)?;
            wrote_term = true;
        }
        if !wrote_term {
            write!(f, "0")?;
        }
        write!(f, " = {}", self.constant.to_decimal_string(DISPLAY_PLACES))
    }
}
