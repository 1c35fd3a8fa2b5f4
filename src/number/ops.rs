//! Operator and formatting traits for the fixed-width types
//!
//! The named methods are the primary API. The `std::ops` traits are thin
//! wrappers over them:
//! - `!`, `&`, `|`, `^` are the bitwise methods
//! - `<<` and `>>` take a `UInt8` distance
//! - `+`, `-`, `*` wrap modulo 2^N, dropping the carry, borrow or high half
//! - `/` and `%` panic on a zero divisor, like native integers
//!
//! Ordering is the unsigned ordering of `compare_to`, and `Display` /
//! `LowerHex` / `UpperHex` print the unsigned value.

use crate::number::{UInt8, UInt16, UInt32, UInt64, UInt128};

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

macro_rules! impl_operators {
    ($($name:ident),+ $(,)?) => {
        $(
            impl PartialOrd for $name {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $name {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.compare_to(other)
                }
            }

            impl Not for $name {
                type Output = $name;

                fn not(self) -> Self::Output {
                    self.complement()
                }
            }

            impl BitAnd for $name {
                type Output = $name;

                fn bitand(self, rhs: $name) -> Self::Output {
                    self.and(rhs)
                }
            }

            impl BitOr for $name {
                type Output = $name;

                fn bitor(self, rhs: $name) -> Self::Output {
                    self.or(rhs)
                }
            }

            impl BitXor for $name {
                type Output = $name;

                fn bitxor(self, rhs: $name) -> Self::Output {
                    self.xor(rhs)
                }
            }

            impl Shl<UInt8> for $name {
                type Output = $name;

                fn shl(self, rhs: UInt8) -> Self::Output {
                    self.shift_left(rhs)
                }
            }

            impl Shr<UInt8> for $name {
                type Output = $name;

                fn shr(self, rhs: UInt8) -> Self::Output {
                    self.shift_right(rhs)
                }
            }

            /// Wrapping addition; the carry is dropped.
            impl Add for $name {
                type Output = $name;

                fn add(self, rhs: $name) -> Self::Output {
                    self.plus(rhs).snd()
                }
            }

            /// Wrapping subtraction; the borrow is dropped.
            impl Sub for $name {
                type Output = $name;

                fn sub(self, rhs: $name) -> Self::Output {
                    self.minus(rhs).snd()
                }
            }

            /// Wrapping multiplication; only the low half is kept.
            impl Mul for $name {
                type Output = $name;

                fn mul(self, rhs: $name) -> Self::Output {
                    self.times(rhs).snd()
                }
            }

            /// # Panics
            /// When `rhs` is zero.
            impl Div for $name {
                type Output = $name;

                fn div(self, rhs: $name) -> Self::Output {
                    match self.div_mod(rhs) {
                        Ok(result) => result.fst(),
                        Err(err) => panic!("{err}"),
                    }
                }
            }

            /// # Panics
            /// When `rhs` is zero.
            impl Rem for $name {
                type Output = $name;

                fn rem(self, rhs: $name) -> Self::Output {
                    match self.div_mod(rhs) {
                        Ok(result) => result.snd(),
                        Err(err) => panic!("{err}"),
                    }
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(&self.get(), f)
                }
            }

            impl LowerHex for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    LowerHex::fmt(&self.get(), f)
                }
            }

            impl UpperHex for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    UpperHex::fmt(&self.get(), f)
                }
            }
        )+
    };
}

impl_operators!(UInt8, UInt16, UInt32, UInt64, UInt128);
