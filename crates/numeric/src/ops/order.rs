//! Ordering: `max`, `min` and exact numeric comparison
//!
//! Comparison never converts an exact operand to a double, so
//! `9007199254740993` compares greater than `9007199254740992.0` even though
//! both convert to the same double. `max` and `min` do follow contagion: an
//! inexact operand makes the result inexact.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use super::{BinaryOperator, dispatch};
use crate::core::{Number, normalize};
use crate::error::NumericResult;
use crate::scalar::Fixnum;

pub(crate) struct Max;

impl BinaryOperator for Max {
    const NAME: &'static str = "max";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(a.max(b).into())
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a.max(b).clone()))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        // f64::max ignores NaN; a NaN operand poisons the result instead
        Ok(Number::flonum(if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }))
    }
}

pub(crate) struct Min;

impl BinaryOperator for Min {
    const NAME: &'static str = "min";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(a.min(b).into())
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a.min(b).clone()))
    }

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number> {
        Ok(Number::flonum(if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }))
    }
}

/// Compare an exact integer with a double without rounding the integer
fn compare_exact_inexact(exact: &BigInt, inexact: f64) -> Option<Ordering> {
    if inexact.is_nan() {
        return None;
    }
    if inexact.is_infinite() {
        return Some(if inexact > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let whole = inexact.trunc();
    let ordering = exact.cmp(&BigInt::from_f64(whole)?);
    Some(ordering.then_with(|| {
        // same integer part; the fraction decides
        if inexact > whole {
            Ordering::Less
        } else if inexact < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

impl Number {
    /// Larger of two numbers; inexact if either operand is
    pub fn max(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Max, self, other)
    }

    /// Smaller of two numbers; inexact if either operand is
    pub fn min(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Min, self, other)
    }

    /// Numeric comparison across representations
    ///
    /// Returns `None` when either operand is NaN.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use nebula_numeric::Number;
    ///
    /// let exact: Number = "9007199254740993".parse().unwrap();
    /// let inexact = Number::flonum(9007199254740992.0);
    /// assert_eq!(exact.compare(&inexact), Some(Ordering::Greater));
    /// ```
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match self {
            Self::Fixnum(a) => match other {
                Self::Fixnum(b) => Some(a.cmp(b)),
                // a canonical bignum lies outside the fixnum range
                Self::Bignum(b) => Some(if b.is_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }),
                Self::Flonum(b) => compare_exact_inexact(&a.to_bigint(), b.value()),
            },
            Self::Bignum(a) => match other {
                Self::Fixnum(_) => Some(if a.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }),
                Self::Bignum(b) => Some(a.cmp(b)),
                Self::Flonum(b) => compare_exact_inexact(a.as_bigint(), b.value()),
            },
            Self::Flonum(a) => match other {
                Self::Fixnum(b) => {
                    compare_exact_inexact(&b.to_bigint(), a.value()).map(Ordering::reverse)
                }
                Self::Bignum(b) => {
                    compare_exact_inexact(b.as_bigint(), a.value()).map(Ordering::reverse)
                }
                Self::Flonum(b) => a.partial_cmp(b),
            },
        }
    }

    /// Numeric equality: `1` equals `1.0`, NaN equals nothing
    pub fn num_eq(&self, other: &Number) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    pub fn lt(&self, other: &Number) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    pub fn le(&self, other: &Number) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    pub fn gt(&self, other: &Number) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    pub fn ge(&self, other: &Number) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater | Ordering::Equal))
    }
}
