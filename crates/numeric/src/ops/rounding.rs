//! Rounding to integers
//!
//! Exact integers are their own rounding. Flonums round in floating point
//! and the result converts back to an exact integer, so `(round 2.5)` is
//! exact `3`. NaN and the infinities have no integer part and are rejected,
//! except by `fractional-part`, which stays inexact.

use super::{UnaryOperator, dispatch_unary};
use crate::core::{Number, exact_from_f64};
use crate::error::NumericResult;
use crate::scalar::{Bignum, Fixnum, Flonum};

/// Declare an integer-rounding operator from its flonum rounding function
macro_rules! rounding_operator {
    ($(#[$meta:meta])* $name:ident, $operation:literal, $round:expr) => {
        $(#[$meta])*
        pub(crate) struct $name;

        impl UnaryOperator for $name {
            const NAME: &'static str = $operation;

            fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
                Ok(a.into())
            }

            fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
                Ok(a.clone().into())
            }

            fn flonum(&self, a: f64) -> NumericResult<Number> {
                let round: fn(&Flonum) -> Flonum = $round;
                exact_from_f64(Self::NAME, round(&Flonum::new(a)).value())
            }
        }
    };
}

rounding_operator!(
    /// Round to nearest, halves away from zero
    Round,
    "round",
    Flonum::round_half_away
);
rounding_operator!(Floor, "floor", Flonum::floor);
rounding_operator!(Ceiling, "ceiling", Flonum::ceil);
rounding_operator!(
    /// Round toward zero
    IntegerPart,
    "truncate",
    Flonum::trunc
);

/// `x - truncate(x)`: exact zero for exact integers
pub(crate) struct FractionalPart;

impl UnaryOperator for FractionalPart {
    const NAME: &'static str = "fractional-part";

    fn fixnum(&self, _a: Fixnum) -> NumericResult<Number> {
        Ok(Number::ZERO)
    }

    fn bignum(&self, _a: &Bignum) -> NumericResult<Number> {
        Ok(Number::ZERO)
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        if a.is_infinite() {
            return Ok(Number::flonum(f64::NAN));
        }
        Ok(Number::flonum(Flonum::new(a).fract().value()))
    }
}

impl Number {
    /// Round to the nearest integer, halves away from zero
    ///
    /// ```
    /// use nebula_numeric::Number;
    ///
    /// assert_eq!(Number::flonum(2.5).round(), Ok(Number::fixnum(3)));
    /// assert_eq!(Number::flonum(-2.5).round(), Ok(Number::fixnum(-3)));
    /// ```
    pub fn round(&self) -> NumericResult<Number> {
        dispatch_unary(&Round, self)
    }

    /// Largest integer not greater than `self`
    pub fn floor(&self) -> NumericResult<Number> {
        dispatch_unary(&Floor, self)
    }

    /// Smallest integer not less than `self`
    pub fn ceiling(&self) -> NumericResult<Number> {
        dispatch_unary(&Ceiling, self)
    }

    /// Integer part, rounding toward zero
    pub fn integer_part(&self) -> NumericResult<Number> {
        dispatch_unary(&IntegerPart, self)
    }

    /// Alias of [`Number::integer_part`]
    pub fn truncate(&self) -> NumericResult<Number> {
        self.integer_part()
    }

    /// What remains after [`Number::integer_part`]; carries the sign of `self`
    pub fn fractional_part(&self) -> NumericResult<Number> {
        dispatch_unary(&FractionalPart, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberKind;
    use crate::error::NumericError;
    use rstest::rstest;

    #[rstest]
    #[case(2.5, 3, 2, 3, 2)]
    #[case(-2.5, -3, -3, -2, -2)]
    #[case(0.49, 0, 0, 1, 0)]
    #[case(-0.5, -1, -1, 0, 0)]
    #[case(7.0, 7, 7, 7, 7)]
    fn test_rounding_flonum(
        #[case] x: f64,
        #[case] round: i64,
        #[case] floor: i64,
        #[case] ceiling: i64,
        #[case] truncate: i64,
    ) {
        let x = Number::flonum(x);
        assert_eq!(x.round(), Ok(Number::fixnum(round)));
        assert_eq!(x.floor(), Ok(Number::fixnum(floor)));
        assert_eq!(x.ceiling(), Ok(Number::fixnum(ceiling)));
        assert_eq!(x.integer_part(), Ok(Number::fixnum(truncate)));
        assert_eq!(x.truncate(), Ok(Number::fixnum(truncate)));
    }

    #[test]
    fn test_rounding_exact_is_identity() {
        let big: Number = "-123456789012345678901234567890".parse().unwrap();
        for n in [Number::fixnum(-9), big] {
            assert_eq!(n.round(), Ok(n.clone()));
            assert_eq!(n.floor(), Ok(n.clone()));
            assert_eq!(n.ceiling(), Ok(n.clone()));
            assert_eq!(n.integer_part(), Ok(n.clone()));
            assert_eq!(n.fractional_part(), Ok(Number::ZERO));
        }
    }

    #[test]
    fn test_rounding_large_flonum_becomes_bignum() {
        let n = Number::flonum(1e20).floor().unwrap();
        assert_eq!(n.kind(), NumberKind::Bignum);
        assert_eq!(n.to_string(), "100000000000000000000");
    }

    #[test]
    fn test_rounding_rejects_non_finite() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Number::flonum(x).round().unwrap_err();
            assert!(matches!(err, NumericError::NotFinite { operation: "round", .. }));
            assert!(Number::flonum(x).floor().is_err());
        }
    }

    #[test]
    fn test_fractional_part() {
        assert_eq!(Number::flonum(2.75).fractional_part(), Ok(Number::flonum(0.75)));
        assert_eq!(Number::flonum(-2.75).fractional_part(), Ok(Number::flonum(-0.75)));
        assert!(
            Number::flonum(f64::INFINITY)
                .fractional_part()
                .unwrap()
                .to_f64()
                .is_nan()
        );
    }
}
