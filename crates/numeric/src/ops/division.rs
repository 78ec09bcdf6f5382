//! Division, floor quotient and modulo
//!
//! All three reject a zero divisor (exact or inexact) before looking at
//! operand kinds, so `(quotient 1.5 0)` reports the zero divisor rather than
//! the inexact dividend. Exact division floors: the tower has no rationals.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::FromPrimitive;

use super::{BinaryOperator, dispatch};
use crate::core::{Number, normalize};
use crate::error::{NumericError, NumericResult};
use crate::scalar::bignum::bigint_to_f64;
use crate::scalar::{Bignum, Fixnum, Flonum, Overflow};

fn reject_zero_divisor(operation: &'static str, a: &Number, b: &Number) -> NumericResult<()> {
    if b.is_zero() {
        Err(NumericError::zero_divisor(operation, a.clone(), b.clone()))
    } else {
        Ok(())
    }
}

/// Division: floored for exact operands, IEEE for inexact ones
pub(crate) struct Div;

impl BinaryOperator for Div {
    const NAME: &'static str = "/";

    fn precheck(&self, a: &Number, b: &Number) -> NumericResult<()> {
        reject_zero_divisor(Self::NAME, a, b)
    }

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        // only MIN / -1 overflows
        match a.checked_div_floor(b) {
            Ok(quotient) => Ok(quotient.into()),
            Err(Overflow) => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a.div_floor(b)))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a / b))
    }
}

/// Floor quotient, exact operands only
pub(crate) struct FloorDiv;

impl BinaryOperator for FloorDiv {
    const NAME: &'static str = "quotient";

    fn precheck(&self, a: &Number, b: &Number) -> NumericResult<()> {
        reject_zero_divisor(Self::NAME, a, b)
    }

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        match a.checked_div_floor(b) {
            Ok(quotient) => Ok(quotient.into()),
            Err(Overflow) => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a.div_floor(b)))
    }

    integer_only!("integer");
}

/// Modulo with the sign of the divisor
///
/// Inexact operands are accepted when integral, and the result is inexact.
pub(crate) struct Modulo;

impl Modulo {
    fn require_integral(x: f64) -> NumericResult<()> {
        if Flonum::new(x).is_integral() {
            Ok(())
        } else {
            Err(NumericError::type_mismatch(Self::NAME, "integer", x))
        }
    }

    /// The exact value of an integral float
    fn integral_bigint(x: f64) -> NumericResult<BigInt> {
        Self::require_integral(x)?;
        BigInt::from_f64(x).ok_or_else(|| NumericError::type_mismatch(Self::NAME, "integer", x))
    }
}

impl BinaryOperator for Modulo {
    const NAME: &'static str = "modulo";

    fn precheck(&self, a: &Number, b: &Number) -> NumericResult<()> {
        reject_zero_divisor(Self::NAME, a, b)
    }

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(a.mod_floor(b).into())
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a.mod_floor(b)))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Self::require_integral(a)?;
        Self::require_integral(b)?;
        let r = a % b;
        let r = if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r };
        Ok(Number::flonum(r))
    }

    // bignum cells stay exact until the end: a bignum past f64 range
    // would otherwise saturate to infinity before the integral check
    fn bignum_flonum(&self, a: &Bignum, b: f64) -> NumericResult<Number> {
        let b = Self::integral_bigint(b)?;
        Ok(Number::flonum(bigint_to_f64(&a.as_bigint().mod_floor(&b))))
    }

    fn flonum_bignum(&self, a: f64, b: &Bignum) -> NumericResult<Number> {
        let a = Self::integral_bigint(a)?;
        Ok(Number::flonum(bigint_to_f64(&a.mod_floor(b.as_bigint()))))
    }
}

impl Number {
    /// Divide `self` by `other`
    ///
    /// Exact operands give the floored quotient; any inexact operand gives
    /// the IEEE quotient. A zero divisor of either exactness is an error.
    ///
    /// ```
    /// use nebula_numeric::Number;
    ///
    /// assert_eq!(Number::fixnum(-7).div(&Number::fixnum(2)), Ok(Number::fixnum(-4)));
    /// assert_eq!(Number::flonum(7.0).div(&Number::fixnum(2)), Ok(Number::flonum(3.5)));
    /// assert!(Number::fixnum(1).div(&Number::flonum(0.0)).is_err());
    /// ```
    pub fn div(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Div, self, other)
    }

    /// Floor quotient of two exact integers
    pub fn floor_div(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&FloorDiv, self, other)
    }

    /// Remainder of floor division, taking the sign of `other`
    pub fn modulo(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Modulo, self, other)
    }
}
