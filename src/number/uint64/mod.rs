//! 64-bit unsigned integer
//!
//! `UInt64` stores a single `i64` bit pattern. Comparison, shifts and
//! addition work on that pattern directly. Multiplication splits both
//! operands into two `UInt32` limbs and combines the four partial products,
//! since no native type twice as wide is assumed.

mod conv;
mod core;

pub use self::core::UInt64;

pub(crate) use conv::TWO_POW_64;
