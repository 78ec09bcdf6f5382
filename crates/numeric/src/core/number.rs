//! The `Number` tagged union
//!
//! A closed set of three representations. Binary operators match on both
//! operands, so every one of the nine pairings is checked by the compiler.

use std::fmt;

use num_bigint::BigInt;

use super::kind::NumberKind;
use super::normalize;
use crate::scalar::{Bignum, Fixnum, Flonum, Overflow};

/// A numeric value of the tower
///
/// Values are immutable; every operation produces a fresh `Number`.
/// Equality is representational: `Number::from(1) != Number::from(1.0)`.
/// Use [`Number::num_eq`] for numeric `=`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum Number {
    /// Machine-width exact integer
    Fixnum(Fixnum),
    /// Exact integer too large for a fixnum
    Bignum(Bignum),
    /// Inexact real
    Flonum(Flonum),
}

impl Number {
    /// Exact zero
    pub const ZERO: Self = Self::Fixnum(Fixnum::ZERO);

    /// Create a fixnum
    pub const fn fixnum(value: i64) -> Self {
        Self::Fixnum(Fixnum::new(value))
    }

    /// Create a flonum
    pub const fn flonum(value: f64) -> Self {
        Self::Flonum(Flonum::new(value))
    }

    /// Create an exact integer in canonical form
    ///
    /// Values that fit a machine word become fixnums.
    pub fn from_bigint(value: BigInt) -> Self {
        normalize::normalize(value)
    }

    /// Get the representation kind
    pub fn kind(&self) -> NumberKind {
        match self {
            Self::Fixnum(_) => NumberKind::Fixnum,
            Self::Bignum(_) => NumberKind::Bignum,
            Self::Flonum(_) => NumberKind::Flonum,
        }
    }

    /// Check for an exact value
    pub fn is_exact(&self) -> bool {
        self.kind().is_exact()
    }

    /// Check for an inexact value
    pub fn is_inexact(&self) -> bool {
        !self.is_exact()
    }

    /// Check for exact `0`
    pub fn is_exact_zero(&self) -> bool {
        matches!(self, Self::Fixnum(f) if f.is_zero())
    }

    /// Check for zero of either exactness
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Fixnum(f) => f.is_zero(),
            Self::Bignum(_) => false,
            Self::Flonum(f) => f.is_zero(),
        }
    }

    /// Check for a negative value (`-0.0` and NaN are not negative)
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Fixnum(f) => f.value() < 0,
            Self::Bignum(b) => b.is_negative(),
            Self::Flonum(f) => f.value() < 0.0,
        }
    }

    /// Check for an integer value, exact or inexact
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Fixnum(_) | Self::Bignum(_) => true,
            Self::Flonum(f) => f.is_integral(),
        }
    }

    /// Narrow to a fixnum, failing for bignums and flonums
    pub fn to_fixnum_checked(&self) -> Result<Fixnum, Overflow> {
        match self {
            Self::Fixnum(f) => Ok(*f),
            Self::Bignum(b) => b.to_fixnum_checked(),
            Self::Flonum(_) => Err(Overflow),
        }
    }

    /// Convert to a double, possibly losing precision
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Fixnum(f) => f.to_f64(),
            Self::Bignum(b) => b.to_f64(),
            Self::Flonum(f) => f.value(),
        }
    }

    /// Widen an exact value to a big integer; `None` for flonums
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Fixnum(f) => Some(f.to_bigint()),
            Self::Bignum(b) => Some(b.as_bigint().clone()),
            Self::Flonum(_) => None,
        }
    }

    /// Get the `i64` payload of a fixnum
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Fixnum(f) => Some(f.value()),
            _ => None,
        }
    }

    /// Get the `f64` payload of a flonum
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Flonum(f) => Some(f.value()),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixnum(n) => n.fmt(f),
            Self::Bignum(n) => n.fmt(f),
            Self::Flonum(n) => n.fmt(f),
        }
    }
}

// Conversions
impl From<Fixnum> for Number {
    fn from(v: Fixnum) -> Self {
        Self::Fixnum(v)
    }
}

impl From<Bignum> for Number {
    fn from(v: Bignum) -> Self {
        Self::Bignum(v)
    }
}

impl From<Flonum> for Number {
    fn from(v: Flonum) -> Self {
        Self::Flonum(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::fixnum(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::fixnum(i64::from(v))
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Self::from_bigint(BigInt::from(v))
    }
}

impl From<i128> for Number {
    fn from(v: i128) -> Self {
        Self::from_bigint(BigInt::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::flonum(v)
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Self::from_bigint(v)
    }
}
