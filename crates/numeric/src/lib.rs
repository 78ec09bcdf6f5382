//! Numeric tower for a Scheme-family runtime
//!
//! Three representations behind one [`Number`] type:
//! - [`Fixnum`]: machine-width exact integer
//! - [`Bignum`]: arbitrary-precision exact integer, only for values that do
//!   not fit a fixnum
//! - [`Flonum`]: IEEE 754 double, the only inexact representation
//!
//! Exact arithmetic never wraps: fixnum results that overflow are recomputed
//! as bignums, and bignum results that fit a machine word come back as
//! fixnums. Any inexact operand makes the result inexact.
//!
//! ```
//! use nebula_numeric::prelude::*;
//!
//! let max = Number::fixnum(i64::MAX);
//! let sum = max.add(&Number::fixnum(1))?;
//! assert_eq!(sum.kind(), NumberKind::Bignum);
//! assert_eq!(sum.sub(&Number::fixnum(1))?, max);
//!
//! assert_eq!(Number::fixnum(1).add(&Number::flonum(0.5))?, Number::flonum(1.5));
//! # Ok::<(), NumericError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod core;
pub mod error;
pub mod ops;
pub mod scalar;

pub use crate::core::{Number, NumberKind, NumericLimits, exact_from_f64, normalize};
pub use crate::error::{ErrorKind, NumericError, NumericResult};
pub use crate::ops::{BinaryOp, UnaryOp};
pub use crate::scalar::{Bignum, Fixnum, Flonum, Overflow};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{BinaryOp, Number, NumberKind, NumericError, NumericLimits, NumericResult, UnaryOp};
}
