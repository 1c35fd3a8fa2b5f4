//! 8-, 16- and 32-bit unsigned integers
//!
//! The three narrow widths share one definition. Each type wraps the signed
//! native integer of its own width and multiplies by widening to the native
//! unsigned type of twice the width, which always holds the full product.

use crate::error::Result;
use crate::number::word::{Word, carry_out};
use crate::pair::Pair;

use once_cell::sync::Lazy;
use std::cmp::Ordering;

macro_rules! narrow_uint {
    (
        $(#[$attr:meta])*
        $name:ident, $bits:literal, $signed:ty, $unsigned:ty, $wide:ty
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) $signed);

        impl $name {
            /// The value zero.
            pub const ZERO: Self = Self(0);

            /// The value one.
            pub const ONE: Self = Self(1);

            #[doc = concat!("The maximum representable value (2^", $bits, " − 1).")]
            pub const MAX: Self = Self(-1);

            /// The bit width, as a shift distance.
            pub const WIDTH: UInt8 = UInt8($bits as u8 as i8);

            /// Returns the value represented by the same bits as `bits`.
            ///
            /// Values in `0..=255` are copied out of the shared table.
            pub fn as_unsigned(bits: $signed) -> Self {
                match Self::cached(bits) {
                    Some(shared) => *shared,
                    None => Self(bits),
                }
            }

            /// Returns the shared instance for `bits`, if its unsigned value is
            /// in `0..=255`.
            pub fn cached(bits: $signed) -> Option<&'static Self> {
                static CACHE: Lazy<[$name; 256]> = Lazy::new(|| {
                    tracing::trace!(width = $bits, "populated small-value cache");
                    std::array::from_fn(|i| $name(i as $unsigned as $signed))
                });

                let table: &'static [$name; 256] = &CACHE;
                usize::try_from(bits as $unsigned)
                    .ok()
                    .and_then(|index| table.get(index))
            }

            /// The two's-complement bit pattern of this value.
            pub const fn bits(self) -> $signed {
                self.0
            }

            /// The native unsigned value.
            pub const fn get(self) -> $unsigned {
                self.0 as $unsigned
            }

            pub fn byte_value(self) -> i8 {
                self.get() as i8
            }

            pub fn short_value(self) -> i16 {
                self.get() as i16
            }

            pub fn int_value(self) -> i32 {
                self.get() as i32
            }

            pub fn long_value(self) -> i64 {
                self.get() as i64
            }

            pub fn float_value(self) -> f32 {
                self.double_value() as f32
            }

            /// The exact value as a double.
            pub fn double_value(self) -> f64 {
                let signed = f64::from(self.0);

                if self.0 < 0 {
                    signed + (1u64 << $bits) as f64
                } else {
                    signed
                }
            }

            /// Unsigned comparison of the two bit patterns.
            ///
            /// A set sign bit means the upper half of the range, so it wins
            /// against a clear one. With equal sign bits the signed order is
            /// already the unsigned order.
            pub fn compare_to(&self, other: &Self) -> Ordering {
                match (self.0 < 0, other.0 < 0) {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => self.0.cmp(&other.0),
                }
            }

            pub fn less_than(self, other: Self) -> bool {
                self.compare_to(&other) == Ordering::Less
            }

            pub fn lte(self, other: Self) -> bool {
                !self.greater_than(other)
            }

            pub fn greater_than(self, other: Self) -> bool {
                other.less_than(self)
            }

            pub fn gte(self, other: Self) -> bool {
                !self.less_than(other)
            }

            /// Whether the value is non-zero.
            pub fn is_positive(self) -> bool {
                self.greater_than(Self::ZERO)
            }

            /// Bitwise complement.
            pub fn complement(self) -> Self {
                Self::as_unsigned(!self.0)
            }

            pub fn and(self, other: Self) -> Self {
                Self::as_unsigned(self.0 & other.0)
            }

            pub fn or(self, other: Self) -> Self {
                Self::as_unsigned(self.0 | other.0)
            }

            pub fn xor(self, other: Self) -> Self {
                Self::as_unsigned(self.0 ^ other.0)
            }

            /// Logical left shift. Distances of `WIDTH` or more yield zero.
            pub fn shift_left(self, distance: UInt8) -> Self {
                if distance.gte(Self::WIDTH) {
                    return Self::ZERO;
                }

                Self::as_unsigned(self.0 << distance.get())
            }

            /// Logical right shift. Distances of `WIDTH` or more yield zero.
            pub fn shift_right(self, distance: UInt8) -> Self {
                if distance.gte(Self::WIDTH) {
                    return Self::ZERO;
                }

                Self::as_unsigned((self.get() >> distance.get()) as $signed)
            }

            #[doc = concat!("Returns `(carry, (self + other) mod 2^", $bits, ")`.")]
            pub fn plus(self, other: Self) -> Pair<bool, Self> {
                let sum = self.0.wrapping_add(other.0);
                let carry = carry_out(self.0 < 0, other.0 < 0, sum < 0);

                Pair::new(carry, Self::as_unsigned(sum))
            }

            pub fn plus_one(self) -> Pair<bool, Self> {
                self.plus(Self::ONE)
            }

            #[doc = concat!("Returns `(other > self, (self - other) mod 2^", $bits, ")`.")]
            pub fn minus(self, other: Self) -> Pair<bool, Self> {
                let borrow = other.greater_than(self);
                let negated = other.complement().plus_one().snd();

                self.plus(negated).map_fst(|_| borrow)
            }

            /// Returns the full product as `(high, low)` halves.
            pub fn times(self, other: Self) -> Pair<Self, Self> {
                let product = <$wide>::from(self.get()) * <$wide>::from(other.get());

                Pair::new(
                    Self::as_unsigned((product >> $bits) as $unsigned as $signed),
                    Self::as_unsigned(product as $unsigned as $signed),
                )
            }

            /// Returns `(quotient, remainder)`.
            ///
            /// # Errors
            /// [`ArithmeticError::DivisionByZero`](crate::ArithmeticError)
            /// when `divisor` is zero.
            #[cfg(not(feature = "speed"))]
            pub fn div_mod(self, divisor: Self) -> Result<Pair<Self, Self>> {
                crate::number::word::restoring_div_mod(self, divisor)
            }

            /// Returns `(quotient, remainder)` (native division fast path).
            ///
            /// # Errors
            /// [`ArithmeticError::DivisionByZero`](crate::ArithmeticError)
            /// when `divisor` is zero.
            #[cfg(feature = "speed")]
            pub fn div_mod(self, divisor: Self) -> Result<Pair<Self, Self>> {
                let (dividend, divisor) = (self.get(), divisor.get());

                match (dividend.checked_div(divisor), dividend.checked_rem(divisor)) {
                    (Some(quotient), Some(remainder)) => Ok(Pair::new(
                        Self::as_unsigned(quotient as $signed),
                        Self::as_unsigned(remainder as $signed),
                    )),
                    _ => {
                        tracing::debug!(width = $bits, "rejected division by zero");
                        Err(crate::ArithmeticError::DivisionByZero)
                    }
                }
            }
        }

        impl Word for $name {
            const BITS: u32 = $bits;
            const ZERO: Self = $name::ZERO;
            const ONE: Self = $name::ONE;

            fn top_bit_set(self) -> bool {
                self.0 < 0
            }

            fn plus(self, other: Self) -> Pair<bool, Self> {
                $name::plus(self, other)
            }

            fn minus(self, other: Self) -> Pair<bool, Self> {
                $name::minus(self, other)
            }

            fn times(self, other: Self) -> Pair<Self, Self> {
                $name::times(self, other)
            }

            fn shift_left(self, distance: UInt8) -> Self {
                $name::shift_left(self, distance)
            }

            fn shift_right(self, distance: UInt8) -> Self {
                $name::shift_right(self, distance)
            }

            fn or(self, other: Self) -> Self {
                $name::or(self, other)
            }
        }

        impl From<$unsigned> for $name {
            fn from(value: $unsigned) -> Self {
                Self::as_unsigned(value as $signed)
            }
        }

        impl From<$name> for $unsigned {
            fn from(value: $name) -> Self {
                value.get()
            }
        }
    };
}

narrow_uint!(
    /// Unsigned 8-bit integer backed by an `i8` bit pattern.
    ///
    /// Every value of this type is cached, since the whole range fits the
    /// shared table. It also serves as the shift distance of every width.
    UInt8, 8, i8, u8, u16
);

narrow_uint!(
    /// Unsigned 16-bit integer backed by an `i16` bit pattern.
    UInt16, 16, i16, u16, u32
);

narrow_uint!(
    /// Unsigned 32-bit integer backed by an `i32` bit pattern.
    ///
    /// Also the limb type of [`UInt64`](crate::UInt64).
    UInt32, 32, i32, u32, u64
);
