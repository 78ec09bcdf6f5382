//! Core types: the `Number` union, its kinds, normalization, literal
//! conversion and limits.

pub mod kind;
pub mod limits;
pub mod normalize;
pub mod number;
mod parse;

pub use kind::NumberKind;
pub use limits::NumericLimits;
pub use normalize::{exact_from_f64, normalize};
pub use number::Number;
