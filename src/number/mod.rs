//! Fixed-width unsigned integer types
//!
//! This module defines the five unsigned widths used throughout the crate.
//!
//! Each type is a standalone value wrapping native signed bit patterns:
//! - `UInt8`, `UInt16`, `UInt32`: one `i8` / `i16` / `i32`
//! - `UInt64`: one `i64`, multiplied as two `UInt32` limbs
//! - `UInt128`: two `i64` limbs (`high`, `low`), every operation composed
//!   from `UInt64` operations
//!
//! All types expose the same operation set (factory, accessors, unsigned
//! ordering, bitwise operations, shifts by a `UInt8` distance, carrying
//! addition, borrowing subtraction, double-width multiplication and
//! division with remainder) without sharing a public base trait.

mod narrow;
mod ops;
#[cfg(feature = "serde")]
mod serialize;
mod uint128;
mod uint64;
mod word;

pub use narrow::{UInt8, UInt16, UInt32};
pub use uint64::UInt64;
pub use uint128::UInt128;
