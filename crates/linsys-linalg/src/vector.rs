//! Fixed-dimension vectors over exact scalars.
//!
//! A [`Vector`] never changes dimension after construction, and every binary
//! operation checks that both operands share it.

use std::fmt;
use std::ops::Index;
use std::slice;

use linsys_numeric::{ExactScalar, NumericContext};
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::LinalgError;

/// Coordinates are stored inline up to this many entries.
const INLINE_DIM: usize = 4;

/// An immutable tuple of exact scalars.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Vector {
    coordinates: SmallVec<[ExactScalar; INLINE_DIM]>,
}

impl Vector {
    /// Creates a vector, rejecting an empty coordinate list.
    pub fn new<I>(coordinates: I) -> Result<Self, LinalgError>
    where
        I: IntoIterator<Item = ExactScalar>,
    {
        let coordinates: SmallVec<[ExactScalar; INLINE_DIM]> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            return Err(LinalgError::EmptyVector);
        }
        Ok(Self { coordinates })
    }

    /// Creates a vector from integer coordinates.
    pub fn from_i64s(coordinates: &[i64]) -> Result<Self, LinalgError> {
        Self::new(coordinates.iter().copied().map(ExactScalar::from_i64))
    }

    /// Parses each coordinate with [`ExactScalar`]'s `FromStr`.
    pub fn parse<S: AsRef<str>>(coordinates: &[S]) -> Result<Self, LinalgError> {
        let parsed = coordinates
            .iter()
            .map(|c| c.as_ref().parse::<ExactScalar>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self, LinalgError> {
        Self::new((0..dimension).map(|_| ExactScalar::zero()))
    }

    /// The zero vector of the same dimension as `self`.
    #[must_use]
    pub fn zeros_like(&self) -> Self {
        Self {
            coordinates: self.coordinates.iter().map(|_| ExactScalar::zero()).collect(),
        }
    }

    /// Returns a copy with coordinate `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimension()`.
    #[must_use]
    pub fn with_coordinate(mut self, index: usize, value: ExactScalar) -> Self {
        self.coordinates[index] = value;
        self
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinates as a slice.
    #[must_use]
    pub fn coordinates(&self) -> &[ExactScalar] {
        &self.coordinates
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> slice::Iter<'_, ExactScalar> {
        self.coordinates.iter()
    }

    fn check_dimension(&self, other: &Self) -> Result<(), LinalgError> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            })
        }
    }

    /// Componentwise `self + other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        })
    }

    /// Componentwise `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        })
    }

    /// Multiplies every coordinate by `c`.
    #[must_use]
    pub fn scale(&self, c: &ExactScalar) -> Self {
        Self {
            coordinates: self.iter().map(|x| x * c).collect(),
        }
    }

    /// Inner product.
    pub fn dot(&self, other: &Self) -> Result<ExactScalar, LinalgError> {
        self.check_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// `|self|²`, computed exactly.
    #[must_use]
    pub fn magnitude_squared(&self) -> ExactScalar {
        self.iter().map(ExactScalar::square).sum()
    }

    /// Euclidean length, rounded to the context precision.
    pub fn magnitude(&self) -> Result<ExactScalar, LinalgError> {
        Ok(self.magnitude_squared().sqrt()?)
    }

    /// The unit vector in the direction of `self`.
    pub fn normalized(&self) -> Result<Self, LinalgError> {
        if self.is_zero() {
            return Err(LinalgError::ZeroVector);
        }
        let inverse = self.magnitude()?.recip().ok_or(LinalgError::ZeroVector)?;
        Ok(self.scale(&inverse))
    }

    /// True if the magnitude is below the context tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        let tolerance = NumericContext::global().tolerance();
        self.magnitude_squared() < tolerance.square()
    }

    /// True if either vector is zero or the angle between them is 0 or π.
    ///
    /// Compares `cos²θ = (u·v)² / (|u|²|v|²)` against 1, so no square root is
    /// taken.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, LinalgError> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let dot = self.dot(other)?;
        let cos_squared = dot.square() / (self.magnitude_squared() * other.magnitude_squared());
        Ok((ExactScalar::one() - cos_squared).is_near_zero())
    }

    /// True if the dot product is near zero.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool, LinalgError> {
        Ok(self.dot(other)?.is_near_zero())
    }

    /// True if every coordinate differs from `other`'s by less than the tolerance.
    pub fn approx_eq(&self, other: &Self) -> Result<bool, LinalgError> {
        Ok(self
            .subtract(other)?
            .iter()
            .all(ExactScalar::is_near_zero))
    }
}

impl Index<usize> for Vector {
    type Output = ExactScalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a ExactScalar;
    type IntoIter = slice::Iter<'a, ExactScalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
