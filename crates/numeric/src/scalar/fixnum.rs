//! Machine-word exact integer

use std::fmt;

use num_bigint::BigInt;
use thiserror::Error;

/// Signal that a value does not fit the machine word
///
/// Internal to the tower: callers see promotion to [`Bignum`](super::Bignum)
/// rather than this error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value does not fit a machine integer")]
pub struct Overflow;

/// Machine-width exact integer
///
/// Newtype around `i64` whose arithmetic reports overflow instead of
/// wrapping. Every `checked_*` method returns `Err(Overflow)` when the exact
/// result leaves the `i64` range; the tower then redoes the operation on
/// bignums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fixnum(i64);

impl Fixnum {
    /// Smallest representable fixnum
    pub const MIN: Self = Self(i64::MIN);

    /// Largest representable fixnum
    pub const MAX: Self = Self(i64::MAX);

    /// Exact zero
    pub const ZERO: Self = Self(0);

    /// Create a new fixnum
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check for exact zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(self, other: Self) -> Result<Self, Overflow> {
        self.0.checked_add(other.0).map(Self).ok_or(Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(self, other: Self) -> Result<Self, Overflow> {
        self.0.checked_sub(other.0).map(Self).ok_or(Overflow)
    }

    /// Checked multiplication
    pub fn checked_mul(self, other: Self) -> Result<Self, Overflow> {
        self.0.checked_mul(other.0).map(Self).ok_or(Overflow)
    }

    /// Checked negation (`MIN` overflows)
    pub fn checked_neg(self) -> Result<Self, Overflow> {
        self.0.checked_neg().map(Self).ok_or(Overflow)
    }

    /// Checked absolute value (`MIN` overflows)
    pub fn checked_abs(self) -> Result<Self, Overflow> {
        self.0.checked_abs().map(Self).ok_or(Overflow)
    }

    /// Checked floor division, rounding toward negative infinity
    ///
    /// The divisor must be nonzero; the only overflow is `MIN / -1`.
    pub fn checked_div_floor(self, other: Self) -> Result<Self, Overflow> {
        debug_assert!(other.0 != 0, "divisor checked by caller");
        if other.0 == -1 {
            return self.checked_neg();
        }
        Ok(Self(num_integer::Integer::div_floor(&self.0, &other.0)))
    }

    /// Floor modulo, result has the sign of the divisor
    ///
    /// The divisor must be nonzero. Never overflows.
    pub fn mod_floor(self, other: Self) -> Self {
        debug_assert!(other.0 != 0, "divisor checked by caller");
        if other.0 == -1 {
            return Self::ZERO;
        }
        Self(num_integer::Integer::mod_floor(&self.0, &other.0))
    }

    /// Checked exponentiation with a non-negative exponent
    pub fn checked_pow(self, exponent: u32) -> Result<Self, Overflow> {
        self.0.checked_pow(exponent).map(Self).ok_or(Overflow)
    }

    /// Checked left shift, overflow when set bits would be shifted out
    pub fn checked_shl(self, amount: u32) -> Result<Self, Overflow> {
        if amount >= i64::BITS {
            return if self.0 == 0 { Ok(self) } else { Err(Overflow) };
        }
        let shifted = self.0 << amount;
        if shifted >> amount == self.0 {
            Ok(Self(shifted))
        } else {
            Err(Overflow)
        }
    }

    /// Arithmetic right shift; amounts past the word width saturate to 0 or -1
    pub fn shr(self, amount: u64) -> Self {
        if amount >= u64::from(i64::BITS) {
            Self(if self.0 < 0 { -1 } else { 0 })
        } else {
            Self(self.0 >> amount)
        }
    }

    /// Widen to an arbitrary-precision integer
    pub fn to_bigint(self) -> BigInt {
        BigInt::from(self.0)
    }

    /// Convert to a double, possibly losing precision
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Fixnum {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<i32> for Fixnum {
    fn from(v: i32) -> Self {
        Self(i64::from(v))
    }
}

impl From<u32> for Fixnum {
    fn from(v: u32) -> Self {
        Self(i64::from(v))
    }
}

impl TryFrom<u64> for Fixnum {
    type Error = Overflow;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Self).map_err(|_| Overflow)
    }
}

impl TryFrom<i128> for Fixnum {
    type Error = Overflow;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Self).map_err(|_| Overflow)
    }
}
