//! Affine parametrizations of solution sets.

use std::fmt;

use linsys_linalg::Vector;
use linsys_numeric::ExactScalar;
use num_traits::{One, Zero};

use crate::error::SystemError;

/// Fractional digits shown in `Display`.
const DISPLAY_PLACES: usize = 3;

/// The set `{ basepoint + Σ tᵢ·directions[i] }`.
///
/// Each direction corresponds to one free variable, in increasing order of
/// the free coordinate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Parametrization {
    basepoint: Vector,
    directions: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization; every direction must match the basepoint's
    /// dimension.
    pub fn new(basepoint: Vector, directions: Vec<Vector>) -> Result<Self, SystemError> {
        let expected = basepoint.dimension();
        if let Some(direction) = directions.iter().find(|d| d.dimension() != expected) {
            return Err(SystemError::DimensionMismatch {
                expected,
                found: direction.dimension(),
            });
        }
        Ok(Self {
            basepoint,
            directions,
        })
    }

    /// The point at all-zero parameters.
    #[must_use]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    /// One direction per free variable.
    #[must_use]
    pub fn directions(&self) -> &[Vector] {
        &self.directions
    }

    /// Dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Number of free parameters.
    #[must_use]
    pub fn free_variable_count(&self) -> usize {
        self.directions.len()
    }

    /// True if there are no directions, i.e. the set is a single point.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.directions.is_empty()
    }

    /// Evaluates `basepoint + Σ parameters[i]·directions[i]`.
    pub fn point_at(&self, parameters: &[ExactScalar]) -> Result<Vector, SystemError> {
        if parameters.len() != self.directions.len() {
            return Err(SystemError::DimensionMismatch {
                expected: self.directions.len(),
                found: parameters.len(),
            });
        }
        self.directions
            .iter()
            .zip(parameters)
            .try_fold(
                self.basepoint.clone(),
                |point, (direction, t)| -> Result<Vector, SystemError> {
                    Ok(point.add(&direction.scale(t))?)
                },
            )
    }
}

impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coordinate in 0..self.dimension() {
            if coordinate > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "x_{} = {}",
                coordinate + 1,
                self.basepoint[coordinate].to_decimal_string(DISPLAY_PLACES)
            )?;
            for (parameter, direction) in self.directions.iter().enumerate() {
                let coefficient = direction[coordinate].round_to_places(DISPLAY_PLACES);
                if coefficient.is_zero() {
                    continue;
                }
                let sign = if coefficient.is_negative() { '-' } else { '+' };
                let magnitude = coefficient.abs();
                if magnitude.is_one() {
                    write!(f, " {sign} t_{}", parameter + 1)?;
                } else {
                    write!(
                        f,
                        " {sign} {} t_{}",
                        magnitude.to_decimal_string(DISPLAY_PLACES),
                        parameter + 1
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[i64]) -> Vector {
        Vector::from_i64s(coords).unwrap()
    }

    #[test]
    fn test_dimension_checked() {
        let err = Parametrization::new(v(&[1, 2, 3]), vec![v(&[1, 0, 0]), v(&[1, 0])]).unwrap_err();
        assert_eq!(
            err,
            SystemError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_point_at() {
        let p = Parametrization::new(v(&[-1, 2, 0]), vec![v(&[0, -1, 1])]).unwrap();
        assert_eq!(p.free_variable_count(), 1);
        assert!(!p.is_unique());
        assert_eq!(
            p.point_at(&[ExactScalar::from_i64(3)]).unwrap(),
            v(&[-1, -1, 3])
        );
        assert!(matches!(
            p.point_at(&[]),
            Err(SystemError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_unique() {
        let p = Parametrization::new(v(&[4, 5]), Vec::new()).unwrap();
        assert!(p.is_unique());
        assert_eq!(p.point_at(&[]).unwrap(), v(&[4, 5]));
    }

    #[test]
    fn test_display() {
        let p = Parametrization::new(v(&[-1, 2, 0]), vec![v(&[0, -1, 1]), v(&[2, 0, 0])]).unwrap();
        assert_eq!(
            p.to_string(),
            "x_1 = -1 + 2 t_2\nx_2 = 2 - t_1\nx_3 = 0 + t_1"
        );
    }
}
