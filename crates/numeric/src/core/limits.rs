//! Size limits for integer results
//!
//! `shift_left` and `pow` can request results whose size is exponential in
//! their input. These limits bound the bit length of such results so a single
//! call cannot exhaust memory.

use crate::error::{NumericError, NumericResult};

/// Configurable limits for numeric operations
///
/// # Example
///
/// ```
/// use nebula_numeric::NumericLimits;
///
/// let limits = NumericLimits::default();
/// assert_eq!(limits.max_integer_bits, 1 << 24);
///
/// let strict = NumericLimits::strict();
/// assert!(strict.check_integer_bits("expt", 100_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericLimits {
    /// Maximum bit length of an integer produced by `shift_left` or `pow`
    pub max_integer_bits: u64,
}

impl Default for NumericLimits {
    fn default() -> Self {
        Self {
            max_integer_bits: 1 << 24, // 2 MiB of magnitude
        }
    }
}

impl NumericLimits {
    /// Permissive limits for trusted programs
    pub const fn permissive() -> Self {
        Self {
            max_integer_bits: 1 << 32,
        }
    }

    /// Strict limits for untrusted programs
    pub const fn strict() -> Self {
        Self {
            max_integer_bits: 1 << 16,
        }
    }

    /// No limits (use with caution!)
    pub const fn unlimited() -> Self {
        Self {
            max_integer_bits: u64::MAX,
        }
    }

    /// Set the maximum integer size
    pub const fn with_max_integer_bits(mut self, bits: u64) -> Self {
        self.max_integer_bits = bits;
        self
    }

    /// Validate the bit length of a result before computing it
    #[inline]
    pub fn check_integer_bits(&self, operation: &'static str, bits: u64) -> NumericResult<()> {
        if bits > self.max_integer_bits {
            tracing::debug!(
                operation,
                bits,
                max = self.max_integer_bits,
                "integer result exceeds configured limit"
            );
            Err(NumericError::limit_exceeded(
                operation,
                bits,
                self.max_integer_bits,
            ))
        } else {
            Ok(())
        }
    }
}
