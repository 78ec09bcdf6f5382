//! Numeric Error Types
//!
//! Every operator in this crate reports failure through [`NumericError`].
//! The surrounding interpreter turns these into language-level conditions;
//! nothing here formats user-facing diagnostics beyond the `Display` impl.

use thiserror::Error;

use crate::core::Number;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors raised by the numeric tower
///
/// Each variant carries the operator name and the offending operand(s) so the
/// caller can build its own diagnostic.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Division-family operator received a zero divisor (exact `0` or `0.0`)
    #[error("{operation}: undefined for {divisor} (dividend {dividend})")]
    ZeroDivisor {
        operation: &'static str,
        dividend: Number,
        divisor: Number,
    },

    /// Operator received a value of the wrong kind
    #[error("{operation}: contract violation, expected {expected}, given {actual}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: Number,
    },

    /// Shift amount does not fit a machine-sized amount
    #[error("{operation}: shift amount {amount} is too large")]
    ShiftTooLarge {
        operation: &'static str,
        amount: Number,
    },

    /// Result would exceed the configured integer size
    #[error("{operation}: result needs {required_bits} bits, limit is {max_bits}")]
    LimitExceeded {
        operation: &'static str,
        required_bits: u64,
        max_bits: u64,
    },

    /// NaN or an infinity cannot become an exact integer
    #[error("{operation}: no exact representation for {value}")]
    NotFinite {
        operation: &'static str,
        value: Number,
    },

    /// Literal could not be converted to a number
    #[error("Invalid number literal '{input}': {reason}")]
    Parse { input: String, reason: &'static str },
}

/// Coarse classification of a [`NumericError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Division by exact or inexact zero
    ZeroDivisor,
    /// Operand of the wrong kind, including non-finite floats
    Type,
    /// Representation or resource overflow
    Overflow,
    /// Malformed literal
    Syntax,
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl NumericError {
    /// Create a zero divisor error
    pub fn zero_divisor(
        operation: &'static str,
        dividend: impl Into<Number>,
        divisor: impl Into<Number>,
    ) -> Self {
        Self::ZeroDivisor {
            operation,
            dividend: dividend.into(),
            divisor: divisor.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        operation: &'static str,
        expected: &'static str,
        actual: impl Into<Number>,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected,
            actual: actual.into(),
        }
    }

    /// Create a shift-amount error
    pub fn shift_too_large(operation: &'static str, amount: impl Into<Number>) -> Self {
        Self::ShiftTooLarge {
            operation,
            amount: amount.into(),
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(operation: &'static str, required_bits: u64, max_bits: u64) -> Self {
        Self::LimitExceeded {
            operation,
            required_bits,
            max_bits,
        }
    }

    /// Create a non-finite conversion error
    pub fn not_finite(operation: &'static str, value: f64) -> Self {
        Self::NotFinite {
            operation,
            value: Number::from(value),
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl NumericError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroDivisor { .. } => "NUMERIC_ZERO_DIVISOR",
            Self::TypeMismatch { .. } => "NUMERIC_TYPE_MISMATCH",
            Self::ShiftTooLarge { .. } => "NUMERIC_SHIFT_TOO_LARGE",
            Self::LimitExceeded { .. } => "NUMERIC_LIMIT_EXCEEDED",
            Self::NotFinite { .. } => "NUMERIC_NOT_FINITE",
            Self::Parse { .. } => "NUMERIC_PARSE_ERROR",
        }
    }

    /// Get the coarse error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroDivisor { .. } => ErrorKind::ZeroDivisor,
            Self::TypeMismatch { .. } | Self::NotFinite { .. } => ErrorKind::Type,
            Self::ShiftTooLarge { .. } | Self::LimitExceeded { .. } => ErrorKind::Overflow,
            Self::Parse { .. } => ErrorKind::Syntax,
        }
    }

    /// Name of the operator that failed, if any
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::ZeroDivisor { operation, .. }
            | Self::TypeMismatch { operation, .. }
            | Self::ShiftTooLarge { operation, .. }
            | Self::LimitExceeded { operation, .. }
            | Self::NotFinite { operation, .. } => Some(*operation),
            Self::Parse { .. } => None,
        }
    }

    /// Check if this is a client error (the program's fault, not the runtime's)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::LimitExceeded { .. })
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

// ============================================================================
// TESTS
// ============================================================================
