//! Exact scalar values.
//!
//! An [`ExactScalar`] is a rational number kept in lowest terms. Decimal input
//! such as `"0.1"` or `"1e-10"` is stored without loss; the only rounded
//! operation is [`ExactScalar::sqrt`], which works to the precision of the
//! global [`NumericContext`].

use dashu::base::{Abs, BitTest, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::context::NumericContext;
use crate::error::NumericError;

/// Digits carried beyond the context precision while iterating.
const GUARD_DIGITS: usize = 5;

/// Hard cap on Newton steps in `sqrt`.
const MAX_SQRT_ITERATIONS: usize = 4096;

/// Largest decimal exponent accepted by `FromStr`.
const MAX_PARSE_EXPONENT: u64 = 4096;

/// An exact rational scalar.
///
/// Rationals are always stored in lowest terms with a positive denominator,
/// so `PartialEq` is exact value equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExactScalar(RBig);

impl ExactScalar {
    /// Creates a scalar from an integer.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(RBig::from(IBig::from(value)))
    }

    /// Creates the scalar `numerator / denominator`.
    pub fn from_ratio(numerator: i64, denominator: i64) -> Result<Self, NumericError> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(
            RBig::from(IBig::from(numerator)) / RBig::from(IBig::from(denominator)),
        ))
    }

    /// Creates a scalar from a signed numerator and unsigned denominator.
    pub fn from_parts(numerator: IBig, denominator: UBig) -> Result<Self, NumericError> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self(RBig::from_parts(numerator, denominator)))
    }

    /// Returns `10^exponent`.
    #[must_use]
    pub fn pow10(exponent: i32) -> Self {
        let power = ten_pow(exponent.unsigned_abs() as usize);
        if exponent >= 0 {
            Self(RBig::from(IBig::from(power)))
        } else {
            Self(RBig::from_parts(IBig::ONE, power))
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the (always positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> &UBig {
        self.0.denominator()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(&self.0 * &self.0)
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(RBig::ONE / &self.0))
        }
    }

    /// Divides by `rhs`, or returns `None` if `rhs` is exactly zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Returns true if `|self|` is below the global tolerance.
    #[must_use]
    pub fn is_near_zero(&self) -> bool {
        self.is_near_zero_within(NumericContext::global().tolerance())
    }

    /// Returns true if `|self| < eps`.
    #[must_use]
    pub fn is_near_zero_within(&self, eps: &Self) -> bool {
        self.0.clone().abs() < eps.0
    }

    /// Rounds half away from zero to `places` fractional decimal digits.
    #[must_use]
    pub fn round_to_places(&self, places: usize) -> Self {
        let scale = ten_pow(places);
        let scaled = &self.0 * &RBig::from(IBig::from(scale.clone()));
        Self(RBig::from_parts(round_half_away(&scaled), scale))
    }

    /// Square root, rounded to the precision of the global context.
    ///
    /// Uses Newton's iteration started from a power of two above the root,
    /// so the iterates decrease monotonically.
    pub fn sqrt(&self) -> Result<Self, NumericError> {
        if self.is_negative() {
            return Err(NumericError::NegativeSqrt);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let precision = NumericContext::global().precision();
        let working = precision + GUARD_DIGITS;
        let step_limit = Self::pow10(-i32::try_from(precision + 1).unwrap_or(i32::MAX));
        let two = Self::from_i64(2);

        let mut x = self.sqrt_upper_bound();
        for _ in 0..MAX_SQRT_ITERATIONS {
            let next = ((&x + &(self / &x)) / two.clone()).round_to_places(working);
            if next.is_zero() {
                return Ok(next);
            }
            let step = (&next - &x).abs();
            x = next;
            if step < step_limit {
                break;
            }
        }

        Ok(x.round_to_places(precision))
    }

    /// A power of two that is at least `sqrt(self)`, for positive `self`.
    #[allow(clippy::cast_possible_wrap)]
    fn sqrt_upper_bound(&self) -> Self {
        // self < 2^(num_bits - den_bits + 1)
        let num_bits = self.0.numerator().clone().unsigned_abs().bit_len() as i64;
        let den_bits = self.0.denominator().bit_len() as i64;
        let exponent = (num_bits - den_bits + 2).div_euclid(2);
        let power = UBig::ONE << (exponent.unsigned_abs() as usize);
        if exponent >= 0 {
            Self(RBig::from(IBig::from(power)))
        } else {
            Self(RBig::from_parts(IBig::ONE, power))
        }
    }

    /// Formats as a decimal rounded to `places` digits, trailing zeros trimmed.
    #[must_use]
    pub fn to_decimal_string(&self, places: usize) -> String {
        let scaled = round_half_away(&(&self.0 * &RBig::from(IBig::from(ten_pow(places)))));
        let sign = if DashuSigned::is_negative(&scaled) { "-" } else { "" };
        let digits = scaled.unsigned_abs().to_string();
        let digits = format!("{digits:0>width$}", width = places + 1);
        let (whole, fraction) = digits.split_at(digits.len() - places);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{fraction}")
        }
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

fn ten_pow(exp: usize) -> UBig {
    UBig::from(10u8).pow(exp)
}

fn round_half_away(value: &RBig) -> IBig {
    let two = UBig::from(2u8);
    let magnitude = value.numerator().clone().unsigned_abs();
    let den = value.denominator();
    let rounded = IBig::from((&two * magnitude + den) / (&two * den));
    if DashuSigned::is_negative(value) {
        -rounded
    } else {
        rounded
    }
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]` exactly.
fn parse_decimal(input: &str) -> Option<ExactScalar> {
    let (mantissa, exponent) = match input.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&input[..at], input[at + 1..].parse::<i64>().ok()?),
        None => (input, 0),
    };
    if exponent.unsigned_abs() > MAX_PARSE_EXPONENT {
        return None;
    }
    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let magnitude = UBig::from_str_radix(&format!("{whole}{fraction}"), 10).ok()?;
    let mut numerator = IBig::from(magnitude);
    if negative {
        numerator = -numerator;
    }

    let shift = exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?;
    let shift_digits = usize::try_from(shift.unsigned_abs()).ok()?;
    let value = if shift >= 0 {
        RBig::from(numerator * IBig::from(ten_pow(shift_digits)))
    } else {
        RBig::from_parts(numerator, ten_pow(shift_digits))
    };
    Some(ExactScalar(value))
}

impl FromStr for ExactScalar {
    type Err = NumericError;

    /// Accepts integers, decimals with an optional exponent, and `p/q`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || NumericError::ParseScalar {
            input: s.to_string(),
        };
        let input = s.trim();
        match input.split_once('/') {
            Some((num, den)) => {
                let num = parse_decimal(num.trim()).ok_or_else(parse_error)?;
                let den = parse_decimal(den.trim()).ok_or_else(parse_error)?;
                num.checked_div(&den).ok_or(NumericError::DivisionByZero)
            }
            None => parse_decimal(input).ok_or_else(parse_error),
        }
    }
}

impl TryFrom<f64> for ExactScalar {
    type Error = NumericError;

    /// Converts through the shortest decimal form, so `0.1` is exactly `1/10`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        format!("{value}").parse()
    }
}

impl Default for ExactScalar {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for ExactScalar {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for ExactScalar {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for ExactScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactScalar({self})")
    }
}

impl fmt::Display for ExactScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

// Arithmetic operations
impl Add for ExactScalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&ExactScalar> for ExactScalar {
    type Output = Self;

    fn add(self, rhs: &ExactScalar) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &ExactScalar {
    type Output = ExactScalar;

    fn add(self, rhs: Self) -> Self::Output {
        ExactScalar(&self.0 + &rhs.0)
    }
}

impl Sub for ExactScalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&ExactScalar> for ExactScalar {
    type Output = Self;

    fn sub(self, rhs: &ExactScalar) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &ExactScalar {
    type Output = ExactScalar;

    fn sub(self, rhs: Self) -> Self::Output {
        ExactScalar(&self.0 - &rhs.0)
    }
}

impl Mul for ExactScalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&ExactScalar> for ExactScalar {
    type Output = Self;

    fn mul(self, rhs: &ExactScalar) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &ExactScalar {
    type Output = ExactScalar;

    fn mul(self, rhs: Self) -> Self::Output {
        ExactScalar(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if the divisor is zero; use [`ExactScalar::checked_div`] otherwise.
impl Div for ExactScalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&ExactScalar> for ExactScalar {
    type Output = Self;

    fn div(self, rhs: &ExactScalar) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &ExactScalar {
    type Output = ExactScalar;

    fn div(self, rhs: Self) -> Self::Output {
        ExactScalar(&self.0 / &rhs.0)
    }
}

impl Neg for ExactScalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &ExactScalar {
    type Output = ExactScalar;

    fn neg(self) -> Self::Output {
        ExactScalar(-self.0.clone())
    }
}

impl Sum for ExactScalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a ExactScalar> for ExactScalar {
    fn sum<I: Iterator<Item = &'a ExactScalar>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<i64> for ExactScalar {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for ExactScalar {
    fn from(n: i32) -> Self {
        Self::from_i64(i64::from(n))
    }
}

impl From<IBig> for ExactScalar {
    fn from(n: IBig) -> Self {
        Self(RBig::from(n))
    }
}
