//! The operator table
//!
//! Each binary operator is a [`BinaryOperator`] implementation with one method
//! per (left kind, right kind) pairing. [`dispatch`] selects the cell with a
//! nested match: first on the left operand, then on the right. Operands are
//! never promoted to a common representation up front, so the fixnum fast
//! path stays allocation-free.
//!
//! The three same-kind cells are required. The six mixed cells default to the
//! promotion rules of the tower:
//! - fixnum with bignum: widen the fixnum and use the bignum cell
//! - anything with a flonum: convert the exact side to `f64` and use the
//!   flonum cell (exactness contagion)
//!
//! Operators with different rules for a pairing override that cell.

use num_bigint::BigInt;

use crate::core::{Number, NumericLimits};
use crate::error::NumericResult;
use crate::scalar::{Bignum, Fixnum};

/// One row of the operator table
pub(crate) trait BinaryOperator {
    /// Operator name used in diagnostics
    const NAME: &'static str;

    /// Checks that apply to the original operands before any cell runs
    fn precheck(&self, _a: &Number, _b: &Number) -> NumericResult<()> {
        Ok(())
    }

    fn fixnum_fixnum(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number>;

    fn bignum_bignum(&self, a: &BigInt, b: &BigInt) -> NumericResult<Number>;

    fn flonum_flonum(&self, a: f64, b: f64) -> NumericResult<Number>;

    fn fixnum_bignum(&self, a: Fixnum, b: &Bignum) -> NumericResult<Number> {
        self.bignum_bignum(&a.to_bigint(), b.as_bigint())
    }

    fn bignum_fixnum(&self, a: &Bignum, b: Fixnum) -> NumericResult<Number> {
        self.bignum_bignum(a.as_bigint(), &b.to_bigint())
    }

    fn fixnum_flonum(&self, a: Fixnum, b: f64) -> NumericResult<Number> {
        self.flonum_flonum(a.to_f64(), b)
    }

    fn bignum_flonum(&self, a: &Bignum, b: f64) -> NumericResult<Number> {
        self.flonum_flonum(a.to_f64(), b)
    }

    fn flonum_fixnum(&self, a: f64, b: Fixnum) -> NumericResult<Number> {
        self.flonum_flonum(a, b.to_f64())
    }

    fn flonum_bignum(&self, a: f64, b: &Bignum) -> NumericResult<Number> {
        self.flonum_flonum(a, b.to_f64())
    }

    /// Redo a fixnum operation that overflowed on bignums
    fn promote(&self, a: Fixnum, b: Fixnum) -> NumericResult<Number> {
        tracing::trace!(operation = Self::NAME, %a, %b, "fixnum overflow, promoting to bignum");
        self.bignum_bignum(&a.to_bigint(), &b.to_bigint())
    }
}

/// Resolve and run the cell of `op` for the kinds of `a` and `b`
pub(crate) fn dispatch<O: BinaryOperator>(op: &O, a: &Number, b: &Number) -> NumericResult<Number> {
    op.precheck(a, b)
        .and_then(|()| match a {
            Number::Fixnum(x) => match b {
                Number::Fixnum(y) => op.fixnum_fixnum(*x, *y),
                Number::Bignum(y) => op.fixnum_bignum(*x, y),
                Number::Flonum(y) => op.fixnum_flonum(*x, y.value()),
            },
            Number::Bignum(x) => match b {
                Number::Fixnum(y) => op.bignum_fixnum(x, *y),
                Number::Bignum(y) => op.bignum_bignum(x.as_bigint(), y.as_bigint()),
                Number::Flonum(y) => op.bignum_flonum(x, y.value()),
            },
            Number::Flonum(x) => match b {
                Number::Fixnum(y) => op.flonum_fixnum(x.value(), *y),
                Number::Bignum(y) => op.flonum_bignum(x.value(), y),
                Number::Flonum(y) => op.flonum_flonum(x.value(), y.value()),
            },
        })
        .inspect_err(|e| tracing::debug!(operation = O::NAME, code = e.code(), "{e}"))
}

/// One-operand counterpart of [`BinaryOperator`]
pub(crate) trait UnaryOperator {
    const NAME: &'static str;

    fn fixnum(&self, a: Fixnum) -> NumericResult<Number>;

    fn bignum(&self, a: &Bignum) -> NumericResult<Number>;

    fn flonum(&self, a: f64) -> NumericResult<Number>;
}

pub(crate) fn dispatch_unary<O: UnaryOperator>(op: &O, a: &Number) -> NumericResult<Number> {
    match a {
        Number::Fixnum(x) => op.fixnum(*x),
        Number::Bignum(x) => op.bignum(x),
        Number::Flonum(x) => op.flonum(x.value()),
    }
    .inspect_err(|e| tracing::debug!(operation = O::NAME, code = e.code(), "{e}"))
}

/// Fill the five flonum cells of an integer-only operator with type errors
///
/// The error names the first inexact operand. Declared ahead of the operator
/// modules so it is in textual scope for them.
macro_rules! integer_only {
    ($expected:literal) => {
        fn flonum_flonum(&self, a: f64, _b: f64) -> NumericResult<Number> {
            Err(NumericError::type_mismatch(Self::NAME, $expected, a))
        }

        fn fixnum_flonum(&self, _a: Fixnum, b: f64) -> NumericResult<Number> {
            Err(NumericError::type_mismatch(Self::NAME, $expected, b))
        }

        fn bignum_flonum(&self, _a: &Bignum, b: f64) -> NumericResult<Number> {
            Err(NumericError::type_mismatch(Self::NAME, $expected, b))
        }

        fn flonum_fixnum(&self, a: f64, _b: Fixnum) -> NumericResult<Number> {
            Err(NumericError::type_mismatch(Self::NAME, $expected, a))
        }

        fn flonum_bignum(&self, a: f64, _b: &Bignum) -> NumericResult<Number> {
            Err(NumericError::type_mismatch(Self::NAME, $expected, a))
        }
    };
}

mod arith;
mod bitwise;
mod division;
mod order;
mod rounding;
mod unary;

/// Binary operators by name, for callers that resolve operators at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Modulo,
    Pow,
    ShiftLeft,
    ShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Max,
    Min,
}

impl BinaryOp {
    /// Every binary operator
    pub const ALL: [Self; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::FloorDiv,
        Self::Modulo,
        Self::Pow,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::BitwiseAnd,
        Self::BitwiseOr,
        Self::BitwiseXor,
        Self::Max,
        Self::Min,
    ];

    /// Name used in diagnostics and by [`BinaryOp::from_name`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => arith::Add::NAME,
            Self::Sub => arith::Sub::NAME,
            Self::Mul => arith::Mul::NAME,
            Self::Div => division::Div::NAME,
            Self::FloorDiv => division::FloorDiv::NAME,
            Self::Modulo => division::Modulo::NAME,
            Self::Pow => arith::Pow::NAME,
            Self::ShiftLeft => bitwise::ShiftLeft::NAME,
            Self::ShiftRight => bitwise::ShiftRight::NAME,
            Self::BitwiseAnd => bitwise::And::NAME,
            Self::BitwiseOr => bitwise::Or::NAME,
            Self::BitwiseXor => bitwise::Xor::NAME,
            Self::Max => order::Max::NAME,
            Self::Min => order::Min::NAME,
        }
    }

    /// Look up an operator by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Apply the operator with default limits
    pub fn apply(self, a: &Number, b: &Number) -> NumericResult<Number> {
        self.apply_with(a, b, &NumericLimits::default())
    }

    /// Apply the operator with explicit limits
    pub fn apply_with(
        self,
        a: &Number,
        b: &Number,
        limits: &NumericLimits,
    ) -> NumericResult<Number> {
        match self {
            Self::Add => a.add(b),
            Self::Sub => a.sub(b),
            Self::Mul => a.mul(b),
            Self::Div => a.div(b),
            Self::FloorDiv => a.floor_div(b),
            Self::Modulo => a.modulo(b),
            Self::Pow => a.pow_with(b, limits),
            Self::ShiftLeft => a.shift_left_with(b, limits),
            Self::ShiftRight => a.shift_right_with(b, limits),
            Self::BitwiseAnd => a.bitwise_and(b),
            Self::BitwiseOr => a.bitwise_or(b),
            Self::BitwiseXor => a.bitwise_xor(b),
            Self::Max => a.max(b),
            Self::Min => a.min(b),
        }
    }
}

/// Unary operators by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Negate,
    Abs,
    BitwiseNot,
    Round,
    Floor,
    Ceiling,
    IntegerPart,
    FractionalPart,
    Sqrt,
}

impl UnaryOp {
    /// Every unary operator
    pub const ALL: [Self; 10] = [
        Self::Plus,
        Self::Negate,
        Self::Abs,
        Self::BitwiseNot,
        Self::Round,
        Self::Floor,
        Self::Ceiling,
        Self::IntegerPart,
        Self::FractionalPart,
        Self::Sqrt,
    ];

    /// Name used in diagnostics and by [`UnaryOp::from_name`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => unary::Plus::NAME,
            Self::Negate => unary::Negate::NAME,
            Self::Abs => unary::Abs::NAME,
            Self::BitwiseNot => bitwise::Not::NAME,
            Self::Round => rounding::Round::NAME,
            Self::Floor => rounding::Floor::NAME,
            Self::Ceiling => rounding::Ceiling::NAME,
            Self::IntegerPart => rounding::IntegerPart::NAME,
            Self::FractionalPart => rounding::FractionalPart::NAME,
            Self::Sqrt => unary::Sqrt::NAME,
        }
    }

    /// Look up an operator by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Apply the operator
    pub fn apply(self, a: &Number) -> NumericResult<Number> {
        match self {
            Self::Plus => a.unary_add(),
            Self::Negate => a.unary_sub(),
            Self::Abs => a.abs(),
            Self::BitwiseNot => a.bitwise_not(),
            Self::Round => a.round(),
            Self::Floor => a.floor(),
            Self::Ceiling => a.ceiling(),
            Self::IntegerPart => a.integer_part(),
            Self::FractionalPart => a.fractional_part(),
            Self::Sqrt => a.sqrt(),
        }
    }
}
