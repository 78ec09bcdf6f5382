//! Addition, subtraction, multiplication and exponentiation

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::{BinaryOperator, dispatch};
use crate::core::{Number, NumericLimits, normalize};
use crate::error::{NumericError, NumericResult};
use crate::scalar::{Bignum, Fixnum, Overflow};

pub(crate) struct Add;

impl BinaryOperator for Add {
    const NAME: &'static str = "+";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        match a.checked_add(b) {
            Ok(sum) => Ok(sum.into()),
            Err(Overflow) => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a + b))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a + b))
    }
}

pub(crate) struct Sub;

impl BinaryOperator for Sub {
    const NAME: &'static str = "-";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        match a.checked_sub(b) {
            Ok(difference) => Ok(difference.into()),
            Err(Overflow) => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a - b))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a - b))
    }
}

/// Multiplication
///
/// An exact zero on either side annihilates the other operand, flonums
/// included: `0 * 1.5` is exact `0`, not `0.0`.
pub(crate) struct Mul;

impl BinaryOperator for Mul {
    const NAME: &'static str = "*";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        match a.checked_mul(b) {
            Ok(product) => Ok(product.into()),
            Err(Overflow) => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a * b))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a * b))
    }

    fn fixnum_bignum(&self, a: Fixnum, b: &Bignum) -> NumericResult<Number> {
        if a.is_zero() {
            return Ok(Number::ZERO);
        }
        self.bignum_bignum(&a.to_bigint(), b.as_bigint())
    }

    fn bignum_fixnum(&self, a: &Bignum, b: Fixnum) -> NumericResult<Number> {
        if b.is_zero() {
            return Ok(Number::ZERO);
        }
        self.bignum_bignum(a.as_bigint(), &b.to_bigint())
    }

    fn fixnum_flonum(&self, a: Fixnum, b: f64) -> NumericResult<Number> {
        if a.is_zero() {
            return Ok(Number::ZERO);
        }
        self.flonum_flonum(a.to_f64(), b)
    }

    fn flonum_fixnum(&self, a: f64, b: Fixnum) -> NumericResult<Number> {
        if b.is_zero() {
            return Ok(Number::ZERO);
        }
        self.flonum_flonum(a, b.to_f64())
    }
}

/// Exponentiation
///
/// Exact operands give an exact result. A negative exact exponent gives
/// `1 / base^|e|` under floor division, since the tower has no rationals.
/// Results that would exceed [`NumericLimits::max_integer_bits`] are
/// rejected before any work is done.
pub(crate) struct Pow {
    pub(crate) limits: NumericLimits,
}

impl Pow {
    fn exact(&self, base: &BigInt, exponent: &BigInt) -> NumericResult<Number> {
        if exponent.is_negative() {
            return self.reciprocal(base, exponent);
        }
        if exponent.is_zero() || base.is_one() {
            return Ok(Number::fixnum(1));
        }
        if base.is_zero() {
            return Ok(Number::ZERO);
        }
        if base.magnitude().is_one() {
            // base is -1
            return Ok(Number::fixnum(if exponent.is_odd() { -1 } else { 1 }));
        }

        let max_bits = self.limits.max_integer_bits;
        let Some(e) = exponent.to_u64() else {
            return Err(NumericError::limit_exceeded(Self::NAME, u64::MAX, max_bits));
        };
        // |base| >= 2, so the result needs at least this many bits
        let required = (base.bits() - 1).saturating_mul(e).saturating_add(1);
        self.limits.check_integer_bits(Self::NAME, required)?;
        let e = u32::try_from(e)
            .map_err(|_| NumericError::limit_exceeded(Self::NAME, required, max_bits))?;
        Ok(normalize(base.pow(e)))
    }

    /// `floor(1 / base^|exponent|)` without computing the power
    fn reciprocal(&self, base: &BigInt, exponent: &BigInt) -> NumericResult<Number> {
        if base.is_zero() {
            return Err(NumericError::zero_divisor(Self::NAME, Number::fixnum(1), Number::ZERO));
        }
        let odd = exponent.is_odd();
        let result = if base.is_one() {
            1
        } else if base.magnitude().is_one() {
            if odd { -1 } else { 1 }
        } else if base.is_positive() {
            0
        } else if odd {
            // 1 / (large negative) floors to -1
            -1
        } else {
            0
        };
        Ok(Number::fixnum(result))
    }
}

impl BinaryOperator for Pow {
    const NAME: &'static str = "expt";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        match u32::try_from(b.value()) {
            Ok(e) => match a.checked_pow(e) {
                Ok(power) => Ok(power.into()),
                Err(Overflow) => self.promote(a, b),
            },
            Err(_) => self.exact(&a.to_bigint(), &b.to_bigint()),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        self.exact(a, b)
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a.powf(b)))
    }
}

impl Number {
    /// Sum of two numbers
    pub fn add(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Add, self, other)
    }

    /// Difference of two numbers
    pub fn sub(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Sub, self, other)
    }

    /// Product of two numbers
    pub fn mul(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Mul, self, other)
    }

    /// Raise `self` to `exponent` with default limits
    ///
    /// ```
    /// use nebula_numeric::Number;
    ///
    /// let big = Number::fixnum(2).pow(&Number::fixnum(100)).unwrap();
    /// assert_eq!(big.to_string(), "1267650600228229401496703205376");
    /// ```
    pub fn pow(&self, exponent: &Number) -> NumericResult<Number> {
        self.pow_with(exponent, &NumericLimits::default())
    }

    /// Raise `self` to `exponent` with explicit limits
    pub fn pow_with(&self, exponent: &Number, limits: &NumericLimits) -> NumericResult<Number> {
        dispatch(&Pow { limits: *limits }, self, exponent)
    }
}
