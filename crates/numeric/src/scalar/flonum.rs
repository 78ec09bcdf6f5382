//! IEEE double inexact real

use std::cmp::Ordering;
use std::fmt;

/// IEEE 754 double-precision inexact real
///
/// **IMPORTANT**: This type does NOT implement `Eq` or `Hash` because NaN != NaN.
/// Flonums are never normalized or demoted to an exact kind.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Flonum(f64);

impl Flonum {
    /// Create a new flonum
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if this is NaN
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if this is finite (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Check for `0.0` or `-0.0`
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check for an integral value (finite with no fractional part)
    pub fn is_integral(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Total ordering comparison that includes NaN
    ///
    /// Order: -Infinity < finite < +Infinity < NaN
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Round half away from zero: `sign * floor(|x| + 0.5)`
    pub fn round_half_away(&self) -> Self {
        let magnitude = (self.0.abs() + 0.5).floor();
        Self(magnitude.copysign(self.0))
    }

    /// Floor function
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    /// Ceiling function
    pub fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    /// Truncate decimal part
    pub fn trunc(&self) -> Self {
        Self(self.0.trunc())
    }

    /// Fractional part, `x - trunc(x)`
    pub fn fract(&self) -> Self {
        Self(self.0 - self.0.trunc())
    }
}

// PartialEq: NaN != NaN (IEEE 754 standard)
impl PartialEq for Flonum {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Flonum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for Flonum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("+nan.0")
        } else if self.0.is_infinite() {
            f.write_str(if self.0 > 0.0 { "+inf.0" } else { "-inf.0" })
        } else if self.0.fract() == 0.0 && self.0.abs() < 1e16 {
            // Always show the decimal point so inexact integers read as inexact
            write!(f, "{:.1}", self.0)
        } else if self.0.fract() == 0.0 {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f32> for Flonum {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}

impl From<f64> for Flonum {
    fn from(v: f64) -> Self {
        Self(v)
    }
}
