//! Fixed-width unsigned integers built on signed bit patterns
//!
//! This crate provides the unsigned integer types `UInt8`, `UInt16`,
//! `UInt32`, `UInt64` and `UInt128`. Each one stores a native
//! two's-complement pattern of exactly its own width and reinterprets it as
//! an unsigned value, performing arithmetic modulo 2^N and reporting the
//! carry or borrow that native wrapping arithmetic discards.
//!
//! The focus is on **explicit, observable overflow**: addition and
//! subtraction return their carry/borrow flag next to the result,
//! multiplication returns the full double-width product, and division
//! returns quotient and remainder together.
//!
//! # Module overview
//!
//! - `number`
//!   The five fixed-width types. `UInt8`, `UInt16` and `UInt32` widen to a
//!   native type for multiplication. `UInt64` is multiplied as two `UInt32`
//!   limbs and `UInt128` as two `UInt64` limbs, using schoolbook long
//!   multiplication with ripple-carry accumulation. Every width divides
//!   with restoring binary long division.
//!
//! - `pair`
//!   The immutable two-element envelope returned by the arithmetic
//!   operations: `(carry, sum)`, `(borrow, difference)`, `(high, low)` and
//!   `(quotient, remainder)`.
//!
//! - `error`
//!   The single failure condition of the crate, division by zero.
//!
//! # Design goals
//!
//! - Every bit pattern is a valid value and construction never fails
//! - Values are immutable `Copy` types, safe to share across threads
//! - Overflow is a result, never a panic or a silent truncation
//! - Small values (0..=255) of every width come from one shared table
//!
//! # Features
//!
//! - `speed`: narrow widths (8, 16, 32 bits) divide natively instead of
//!   running the restoring loop. Results are identical.
//! - `serde`: serializes every width as its native unsigned value.

mod error;
mod pair;

pub mod number;

pub use error::{ArithmeticError, Result};
pub use number::{UInt8, UInt16, UInt32, UInt64, UInt128};
pub use pair::Pair;
