//! Canonicalization of exact results
//!
//! [`normalize`] is the single choke point every exact-producing path goes
//! through: a big integer that fits a machine word comes back as a fixnum.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use super::number::Number;
use crate::error::{NumericError, NumericResult};
use crate::scalar::{Bignum, Fixnum};

/// Narrow a big integer to its canonical representation
#[inline]
pub fn normalize(value: BigInt) -> Number {
    match Bignum::try_new(value) {
        Ok(big) => Number::Bignum(big),
        Err(small) => Number::Fixnum(small),
    }
}

/// Bounds of the `i64` range as doubles; the upper bound is exclusive
const FIXNUM_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const FIXNUM_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Convert an integral double to an exact integer
///
/// Tries the machine word first and falls back to a bignum. The caller
/// rounds beforehand; any fraction left over is truncated. NaN and the
/// infinities have no exact counterpart.
pub fn exact_from_f64(operation: &'static str, value: f64) -> NumericResult<Number> {
    if !value.is_finite() {
        tracing::debug!(operation, value, "non-finite float has no exact value");
        return Err(NumericError::not_finite(operation, value));
    }
    if (FIXNUM_MIN_F64..FIXNUM_END_F64).contains(&value) {
        return Ok(Number::Fixnum(Fixnum::new(value as i64)));
    }
    tracing::trace!(operation, value, "float outside fixnum range, converting to bignum");
    BigInt::from_f64(value)
        .map(normalize)
        .ok_or_else(|| NumericError::not_finite(operation, value))
}
