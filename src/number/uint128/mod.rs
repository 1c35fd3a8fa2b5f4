//! 128-bit unsigned integer
//!
//! `UInt128` stores two `i64` bit patterns, `high` and `low`. Every
//! operation is expressed through the matching `UInt64` operation on those
//! limbs: comparison is lexicographic, addition ripples the low carry into
//! the high limb, shifts move bits across the limb boundary and
//! multiplication is schoolbook over two `UInt64` limbs.

mod conv;
mod core;

pub use self::core::UInt128;
