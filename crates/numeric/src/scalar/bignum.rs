//! Arbitrary-precision exact integer, canonical by construction

use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

use super::fixnum::{Fixnum, Overflow};

/// Arbitrary-precision exact integer
///
/// Canonical by construction: a `Bignum` never holds a value that fits a
/// [`Fixnum`]. The only public constructor, [`Bignum::try_new`], refuses such
/// values, so any `Number::Bignum` seen by a caller is genuinely oversized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bignum(BigInt);

impl Bignum {
    /// Wrap a big integer that does not fit a fixnum
    ///
    /// Returns the narrowed fixnum as the error when the value fits.
    pub fn try_new(value: BigInt) -> Result<Self, Fixnum> {
        match value.to_i64() {
            Some(small) => Err(Fixnum::new(small)),
            None => Ok(Self(value)),
        }
    }

    /// Borrow the underlying big integer
    pub const fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Unwrap into the underlying big integer
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Narrow to a fixnum
    ///
    /// Canonical bignums always overflow; the method exists for callers that
    /// hold a raw value and for symmetry with the other representations.
    pub fn to_fixnum_checked(&self) -> Result<Fixnum, Overflow> {
        self.0.to_i64().map(Fixnum::new).ok_or(Overflow)
    }

    /// Convert to the nearest double; magnitudes past `f64::MAX` become infinite
    pub fn to_f64(&self) -> f64 {
        bigint_to_f64(&self.0)
    }

    /// Check the sign
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Number of bits in the magnitude
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

/// Nearest double to a big integer, saturating to the signed infinity
pub(crate) fn bigint_to_f64(value: &BigInt) -> f64 {
    match value.to_f64() {
        Some(f) => f,
        None if value.sign() == Sign::Minus => f64::NEG_INFINITY,
        None if value.is_zero() => 0.0,
        None => f64::INFINITY,
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Bignum> for BigInt {
    fn from(b: Bignum) -> Self {
        b.0
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bignum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = BigInt::deserialize(deserializer)?;
        Self::try_new(value)
            .map_err(|small| serde::de::Error::custom(format!("{small} fits a fixnum")))
    }
}
