//! Bitwise operators and arithmetic shifts
//!
//! Defined on exact integers only, with two's-complement semantics of
//! unbounded width: `-1` has every bit set, so `(bitwise-and -1 x)` is `x`
//! for any `x`, bignum or not.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::{BinaryOperator, UnaryOperator, dispatch, dispatch_unary};
use crate::core::{Number, NumericLimits, normalize};
use crate::error::{NumericError, NumericResult};
use crate::scalar::{Bignum, Fixnum};

pub(crate) struct And;

impl BinaryOperator for And {
    const NAME: &'static str = "bitwise-and";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(Number::fixnum(a.value() & b.value()))
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a & b))
    }

    integer_only!("exact integer");
}

pub(crate) struct Or;

impl BinaryOperator for Or {
    const NAME: &'static str = "bitwise-ior";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(Number::fixnum(a.value() | b.value()))
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a | b))
    }

    integer_only!("exact integer");
}

pub(crate) struct Xor;

impl BinaryOperator for Xor {
    const NAME: &'static str = "bitwise-xor";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        Ok(Number::fixnum(a.value() ^ b.value()))
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        Ok(normalize(a ^ b))
    }

    integer_only!("exact integer");
}

pub(crate) struct Not;

impl UnaryOperator for Not {
    const NAME: &'static str = "bitwise-not";

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number> {
        Ok(Number::fixnum(!a.value()))
    }

    fn bignum(&self, a: &Bignum) -> NumericResult<Number> {
        Ok(normalize(!a.as_bigint()))
    }

    fn flonum(&self, a: f64) -> NumericResult<Number> {
        Err(NumericError::type_mismatch(Self::NAME, "exact integer", a))
    }
}

/// Shift `value` by `amount` bits, left when positive and right when negative
///
/// Right shifts floor. Left shifts are checked against `limits` before the
/// result is allocated.
fn shift_bigint(
    operation: &'static str,
    limits: &NumericLimits,
    value: &BigInt,
    amount: i128,
) -> NumericResult<Number> {
    if value.is_zero() {
        return Ok(Number::ZERO);
    }
    let magnitude = amount.unsigned_abs();
    if amount < 0 {
        return Ok(match usize::try_from(magnitude) {
            Ok(bits) if (bits as u64) < value.bits() => normalize(value >> bits),
            // every significant bit shifted out
            _ => Number::fixnum(if value < &BigInt::zero() { -1 } else { 0 }),
        });
    }

    let required = u64::try_from(magnitude)
        .unwrap_or(u64::MAX)
        .saturating_add(value.bits());
    limits.check_integer_bits(operation, required)?;
    let bits = usize::try_from(magnitude).map_err(|_| {
        NumericError::limit_exceeded(operation, required, limits.max_integer_bits)
    })?;
    Ok(normalize(value << bits))
}

/// Left shift by a signed amount; a negative amount shifts right
pub(crate) struct ShiftLeft {
    pub(crate) limits: NumericLimits,
}

impl BinaryOperator for ShiftLeft {
    const NAME: &'static str = "shift-left";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        let amount = b.value();
        if amount < 0 {
            return Ok(a.shr(amount.unsigned_abs()).into());
        }
        match u32::try_from(amount).map(|n| a.checked_shl(n)) {
            Ok(Ok(shifted)) => Ok(shifted.into()),
            _ => self.promote(a, b),
        }
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        match b.to_i64() {
            Some(amount) => shift_bigint(Self::NAME, &self.limits, a, i128::from(amount)),
            None => Err(NumericError::shift_too_large(Self::NAME, normalize(b.clone()))),
        }
    }

    integer_only!("exact integer");
}

/// Arithmetic right shift by a signed amount; a negative amount shifts left
pub(crate) struct ShiftRight {
    pub(crate) limits: NumericLimits,
}

impl BinaryOperator for ShiftRight {
    const NAME: &'static str = "shift-right";

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        let amount = b.value();
        if amount >= 0 {
            return Ok(a.shr(amount.unsigned_abs()).into());
        }
        self.bignum_bignum(&a.to_bigint(), &b.to_bigint())
    }

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number> {
        match b.to_i64() {
            Some(amount) => shift_bigint(Self::NAME, &self.limits, a, -i128::from(amount)),
            None => Err(NumericError::shift_too_large(Self::NAME, normalize(b.clone()))),
        }
    }

    integer_only!("exact integer");
}

impl Number {
    /// Bitwise AND of two exact integers
    pub fn bitwise_and(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&And, self, other)
    }

    /// Bitwise inclusive OR of two exact integers
    pub fn bitwise_or(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Or, self, other)
    }

    /// Bitwise exclusive OR of two exact integers
    pub fn bitwise_xor(&self, other: &Number) -> NumericResult<Number> {
        dispatch(&Xor, self, other)
    }

    /// Bitwise complement of an exact integer, `-x - 1`
    pub fn bitwise_not(&self) -> NumericResult<Number> {
        dispatch_unary(&Not, self)
    }

    /// Shift left by `amount` bits with default limits
    ///
    /// Never wraps: bits shifted past the machine word promote the result
    /// to a bignum.
    ///
    /// ```
    /// use nebula_numeric::{Number, NumberKind};
    ///
    /// let n = Number::fixnum(1).shift_left(&Number::fixnum(64)).unwrap();
    /// assert_eq!(n.kind(), NumberKind::Bignum);
    /// assert_eq!(n.to_string(), "18446744073709551616");
    /// ```
    pub fn shift_left(&self, amount: &Number) -> NumericResult<Number> {
        self.shift_left_with(amount, &NumericLimits::default())
    }

    /// Shift left with explicit limits
    pub fn shift_left_with(&self, amount: &Number, limits: &NumericLimits) -> NumericResult<Number> {
        dispatch(&ShiftLeft { limits: *limits }, self, amount)
    }

    /// Arithmetic shift right by `amount` bits, rounding toward negative infinity
    pub fn shift_right(&self, amount: &Number) -> NumericResult<Number> {
        self.shift_right_with(amount, &NumericLimits::default())
    }

    /// Shift right with explicit limits, which apply to negative amounts
    pub fn shift_right_with(&self, amount: &Number, limits: &NumericLimits) -> NumericResult<Number> {
        dispatch(&ShiftRight { limits: *limits }, self, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberKind;
    use rstest::rstest;

    fn pow2(n: usize) -> Number {
        Number::from_bigint(BigInt::from(1) << n)
    }

    #[rstest]
    #[case(0b1100, 0b1010, 0b1000, 0b1110, 0b0110)]
    #[case(-1, 42, 42, -1, -43)]
    #[case(-8, 5, 0, -3, -3)]
    fn test_bitwise_fixnum(
        #[case] a: i64,
        #[case] b: i64,
        #[case] and: i64,
        #[case] or: i64,
        #[case] xor: i64,
    ) {
        let (a, b) = (Number::fixnum(a), Number::fixnum(b));
        assert_eq!(a.bitwise_and(&b), Ok(Number::fixnum(and)));
        assert_eq!(a.bitwise_or(&b), Ok(Number::fixnum(or)));
        assert_eq!(a.bitwise_xor(&b), Ok(Number::fixnum(xor)));
    }

    #[test]
    fn test_bitwise_mixed_width_normalizes() {
        let big = pow2(100).add(&Number::fixnum(0xff)).unwrap();
        assert_eq!(big.bitwise_and(&Number::fixnum(0x0f)), Ok(Number::fixnum(0x0f)));
        assert_eq!(Number::fixnum(-1).bitwise_and(&big), Ok(big.clone()));
        assert_eq!(big.bitwise_xor(&big), Ok(Number::ZERO));
    }

    #[test]
    fn test_bitwise_not() {
        assert_eq!(Number::fixnum(0).bitwise_not(), Ok(Number::fixnum(-1)));
        assert_eq!(Number::fixnum(i64::MAX).bitwise_not(), Ok(Number::fixnum(i64::MIN)));

        let big = pow2(80);
        let expected = Number::from_bigint(-(BigInt::from(1_i32) << 80_usize) - 1);
        assert_eq!(big.bitwise_not(), Ok(expected));
    }

    #[rstest]
    #[case(Number::flonum(1.0), Number::fixnum(1), Number::flonum(1.0))]
    #[case(Number::fixnum(1), Number::flonum(2.0), Number::flonum(2.0))]
    #[case(pow2(70), Number::flonum(3.0), Number::flonum(3.0))]
    fn test_bitwise_rejects_inexact(
        #[case] a: Number,
        #[case] b: Number,
        #[case] offending: Number,
    ) {
        let err = a.bitwise_or(&b).unwrap_err();
        assert_eq!(
            err,
            NumericError::type_mismatch("bitwise-ior", "exact integer", offending)
        );
        assert!(Number::flonum(1.0).bitwise_not().is_err());
    }

    #[rstest]
    #[case(1, 10, 1024)]
    #[case(-3, 2, -12)]
    #[case(1024, -3, 128)]
    #[case(-7, -1, -4)]
    #[case(0, 1000, 0)]
    fn test_shift_left_fixnum(#[case] a: i64, #[case] n: i64, #[case] expected: i64) {
        assert_eq!(
            Number::fixnum(a).shift_left(&Number::fixnum(n)),
            Ok(Number::fixnum(expected))
        );
    }

    #[test]
    fn test_shift_left_promotes_instead_of_wrapping() {
        assert_eq!(Number::fixnum(1).shift_left(&Number::fixnum(63)), Ok(pow2(63)));
        assert_eq!(Number::fixnum(3).shift_left(&Number::fixnum(100)).unwrap().kind(), NumberKind::Bignum);
        assert_eq!(
            Number::fixnum(-1).shift_left(&Number::fixnum(63)),
            Ok(Number::fixnum(i64::MIN))
        );
    }

    #[rstest]
    #[case(1024, 3, 128)]
    #[case(-7, 1, -4)]
    #[case(-1, 200, -1)]
    #[case(5, 64, 0)]
    #[case(1, -4, 16)]
    fn test_shift_right_fixnum(#[case] a: i64, #[case] n: i64, #[case] expected: i64) {
        assert_eq!(
            Number::fixnum(a).shift_right(&Number::fixnum(n)),
            Ok(Number::fixnum(expected))
        );
    }

    #[test]
    fn test_shift_right_bignum() {
        assert_eq!(pow2(100).shift_right(&Number::fixnum(1)), Ok(pow2(99)));
        assert_eq!(pow2(100).shift_right(&Number::fixnum(40)), Ok(Number::fixnum(1 << 60)));
        assert_eq!(pow2(100).shift_right(&Number::fixnum(1000)), Ok(Number::ZERO));

        let negative = Number::from_bigint(-(BigInt::from(1_i32) << 100_usize) - 1);
        assert_eq!(negative.shift_right(&Number::fixnum(1000)), Ok(Number::fixnum(-1)));
    }

    #[test]
    fn test_shift_by_bignum_amount() {
        let amount = pow2(70);
        let err = Number::fixnum(1).shift_left(&amount).unwrap_err();
        assert_eq!(err, NumericError::shift_too_large("shift-left", amount.clone()));

        let err = pow2(70).shift_right(&amount).unwrap_err();
        assert!(matches!(err, NumericError::ShiftTooLarge { operation: "shift-right", .. }));
    }

    #[test]
    fn test_shift_left_respects_limits() {
        let limits = NumericLimits::strict();
        let err = Number::fixnum(1)
            .shift_left_with(&Number::fixnum(1 << 20), &limits)
            .unwrap_err();
        assert!(matches!(err, NumericError::LimitExceeded { .. }));

        let err = Number::fixnum(1)
            .shift_right_with(&Number::fixnum(-(1 << 20)), &limits)
            .unwrap_err();
        assert!(matches!(err, NumericError::LimitExceeded { operation: "shift-right", .. }));
    }

    #[test]
    fn test_shift_rejects_inexact() {
        let err = Number::flonum(1.0).shift_left(&Number::fixnum(1)).unwrap_err();
        assert_eq!(
            err,
            NumericError::type_mismatch("shift-left", "exact integer", 1.0)
        );
    }
}
