//! Unary plus, negation, absolute value and square root

use num_traits::Signed;

use super::{UnaryOperator, dispatch_unary};
use crate::core::{Number, normalize};
use crate::error::{NumericError, NumericResult};
use crate::scalar::bignum::bigint_to_f64;
use crate::scalar::{Bignum, Fixnum, Overflow};

pub(crate) struct Plus;

impl UnaryOperator for Plus {
    const NAME: &'static str = "+";

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
        Ok(a.into())
    }

    fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
        Ok(a.clone().into())
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a))
    }
}

/// Negate a fixnum, promoting `-MIN`
fn negate_fixnum(operation: &'static str, a: Fixnum) -> Number {
    match a.checked_neg() {
        Ok(negated) => negated.into(),
        Err(Overflow) => {
            tracing::trace!(operation, %a, "fixnum negation overflow, promoting to bignum");
            normalize(-a.to_bigint())
        }
    }
}

pub(crate) struct Negate;

impl UnaryOperator for Negate {
    const NAME: &'static str = "-";

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
        Ok(negate_fixnum(Self::NAME, a))
    }

    fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
        // -(MAX + 1) is MIN
        Ok(normalize(-a.as_bigint()))
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        Ok(Number::flonum(-a))
    }
}

pub(crate) struct Abs;

impl UnaryOperator for Abs {
    const NAME: &'static str = "abs";

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
        if a.value() < 0 {
            Ok(negate_fixnum(Self::NAME, a))
        } else {
            Ok(a.into())
        }
    }

    fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
        Ok(normalize(a.as_bigint().abs()))
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        Ok(Number::flonum(a.abs()))
    }
}

/// Square root
///
/// Exact for perfect squares, inexact otherwise. Negative arguments are
/// rejected: the tower has no complex numbers.
pub(crate) struct Sqrt;

impl UnaryOperator for Sqrt {
    const NAME: &'static str = "sqrt";

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
        if a.value() < 0 {
            return Err(NumericError::type_mismatch(Self::NAME, "nonnegative real", a));
        }
        let root = a.value().isqrt();
        if root * root == a.value() {
            Ok(Number::fixnum(root))
        } else {
            Ok(Number::flonum(a.to_f64().sqrt()))
        }
    }

    fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
        if a.is_negative() {
            return Err(NumericError::type_mismatch(Self::NAME, "nonnegative real", a.clone()));
        }
        let root = a.as_bigint().sqrt();
        if &root * &root == *a.as_bigint() {
            return Ok(normalize(root));
        }
        let approx = a.to_f64();
        if approx.is_finite() {
            Ok(Number::flonum(approx.sqrt()))
        } else {
            // past 2^1024 the integer root has more bits than f64 keeps
            Ok(Number::flonum(bigint_to_f64(&root)))
        }
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        if a < 0.0 {
            return Err(NumericError::type_mismatch(Self::NAME, "nonnegative real", a));
        }
        Ok(Number::flonum(a.sqrt()))
    }
}

impl Number {
    /// Unary plus: the value itself
    pub fn unary_add(&self) -> NumericResult<Number> {
        dispatch_unary(&Plus, self)
    }

    /// Negation; `-i64::MIN` promotes to a bignum
    pub fn unary_sub(&self) -> NumericResult<Number> {
        dispatch_unary(&Negate, self)
    }

    /// Absolute value
    pub fn abs(&self) -> NumericResult<Number> {
        dispatch_unary(&Abs, self)
    }

    /// Square root, exact when the argument is a perfect square
    ///
    /// ```
    /// use nebula_numeric::Number;
    ///
    /// assert_eq!(Number::fixnum(49).sqrt(), Ok(Number::fixnum(7)));
    /// assert_eq!(Number::fixnum(2).sqrt(), Ok(Number::flonum(2f64.sqrt())));
    /// assert!(Number::fixnum(-4).sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> NumericResult<Number> {
        dispatch_unary(&Sqrt, self)
    }
}
