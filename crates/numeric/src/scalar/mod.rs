//! Scalar representations of the numeric tower
//!
//! - `Fixnum`: i64 with checked arithmetic
//! - `Bignum`: canonical arbitrary-precision integer
//! - `Flonum`: f64 without Eq (NaN-aware)

pub mod bignum;
pub mod fixnum;
pub mod flonum;

pub use bignum::Bignum;
pub use fixnum::{Fixnum, Overflow};
pub use flonum::Flonum;
