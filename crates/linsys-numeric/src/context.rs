//! Process-wide numeric settings.
//!
//! The context is fixed once per process: either explicitly through
//! [`NumericContext::install`], or implicitly with the defaults on the first
//! call to [`NumericContext::global`]. It is never changed afterwards.

use std::env;
use std::sync::OnceLock;

use num_traits::Zero;

use crate::error::NumericError;
use crate::scalar::ExactScalar;

static GLOBAL: OnceLock<NumericContext> = OnceLock::new();

/// Overrides [`NumericContext::precision`] in [`NumericContext::from_env`].
pub const PRECISION_ENV: &str = "LINSYS_PRECISION";

/// Overrides [`NumericContext::tolerance`] in [`NumericContext::from_env`].
pub const TOLERANCE_ENV: &str = "LINSYS_TOLERANCE";

/// Precision and tolerance shared by every scalar operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericContext {
    /// Fractional decimal digits kept by rounded operations.
    precision: usize,
    /// Values with magnitude strictly below this are treated as zero.
    tolerance: ExactScalar,
}

impl Default for NumericContext {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            tolerance: ExactScalar::pow10(-Self::DEFAULT_TOLERANCE_EXPONENT),
        }
    }
}

impl NumericContext {
    /// Default number of fractional digits.
    pub const DEFAULT_PRECISION: usize = 30;

    /// The default tolerance is `10^-DEFAULT_TOLERANCE_EXPONENT`.
    pub const DEFAULT_TOLERANCE_EXPONENT: i32 = 10;

    /// Creates a context, rejecting a zero precision or non-positive tolerance.
    pub fn new(precision: usize, tolerance: ExactScalar) -> Result<Self, NumericError> {
        if precision == 0 {
            return Err(NumericError::InvalidContext {
                reason: "precision must be positive".to_string(),
            });
        }
        if tolerance.is_zero() || tolerance.is_negative() {
            return Err(NumericError::InvalidContext {
                reason: format!("tolerance must be positive, got {tolerance}"),
            });
        }
        Ok(Self {
            precision,
            tolerance,
        })
    }

    /// Builds a context from the defaults and the `LINSYS_*` variables.
    pub fn from_env() -> Result<Self, NumericError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, NumericError> {
        let defaults = Self::default();

        let precision = match lookup(PRECISION_ENV) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(precision) => precision,
                Err(_) => {
                    return Err(NumericError::InvalidEnvVar {
                        name: PRECISION_ENV,
                        value,
                    })
                }
            },
            None => defaults.precision,
        };

        let tolerance = match lookup(TOLERANCE_ENV) {
            Some(value) => match value.parse::<ExactScalar>() {
                Ok(tolerance) => tolerance,
                Err(_) => {
                    return Err(NumericError::InvalidEnvVar {
                        name: TOLERANCE_ENV,
                        value,
                    })
                }
            },
            None => defaults.tolerance,
        };

        Self::new(precision, tolerance)
    }

    /// Makes this the process-wide context.
    ///
    /// Fails if a context is already in place, including the default one
    /// created by an earlier call to [`NumericContext::global`].
    pub fn install(self) -> Result<&'static Self, NumericError> {
        GLOBAL
            .set(self)
            .map_err(|_| NumericError::ContextAlreadyInstalled)?;
        let context = Self::global();
        tracing::debug!(
            precision = context.precision,
            tolerance = %context.tolerance,
            "installed numeric context"
        );
        Ok(context)
    }

    /// Returns the process-wide context, installing the default if needed.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::default)
    }

    /// Fractional decimal digits kept by rounded operations.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The near-zero tolerance.
    #[must_use]
    pub fn tolerance(&self) -> &ExactScalar {
        &self.tolerance
    }
}
