//! 64-bit unsigned integer primitive
//!
//! This module defines `UInt64`, an unsigned value stored as the `i64` with
//! the same two's-complement bits.
//!
//! `UInt64` is the first width without a native type twice as wide, so its
//! multiplication is composed from `UInt32` limbs:
//!
//! ```text
//! self  = a_hi * 2^32 + a_lo
//! other = b_hi * 2^32 + b_lo
//! ```
//!
//! and the four limb products are summed column by column with explicit
//! carries.

use crate::error::Result;
use crate::number::UInt8;
use crate::number::UInt32;
use crate::number::word::{self, Word, carry_out};
use crate::pair::Pair;

use once_cell::sync::Lazy;
use std::cmp::Ordering;

/// Unsigned 64-bit integer backed by an `i64` bit pattern.
///
/// Equality and hashing follow the bit pattern. Ordering is unsigned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt64(pub(crate) i64);

static CACHE: Lazy<[UInt64; 256]> = Lazy::new(|| {
    tracing::trace!(width = 64, "populated small-value cache");
    std::array::from_fn(|i| UInt64(i as i64))
});

impl UInt64 {
    /// The value zero.
    pub const ZERO: Self = Self(0);

    /// The value one.
    pub const ONE: Self = Self(1);

    /// The maximum representable value (2⁶⁴ − 1).
    pub const MAX: Self = Self(-1);

    /// The bit width, as a shift distance.
    pub const WIDTH: UInt8 = UInt8(64);

    /// Returns the value represented by the same bits as `bits`.
    pub fn as_unsigned(bits: i64) -> Self {
        match Self::cached(bits) {
            Some(shared) => *shared,
            None => Self(bits),
        }
    }

    /// Returns the shared instance for `bits` when its unsigned value is in
    /// `0..=255`.
    pub fn cached(bits: i64) -> Option<&'static Self> {
        let table: &'static [UInt64; 256] = &CACHE;

        usize::try_from(bits as u64)
            .ok()
            .and_then(|index| table.get(index))
    }

    /// Builds a value from its upper and lower 32-bit halves.
    pub fn from_limbs(high: UInt32, low: UInt32) -> Self {
        Self::as_unsigned((i64::from(high.bits()) << 32) | i64::from(low.get()))
    }

    /// Splits the value into `(high, low)` 32-bit halves.
    pub fn limbs(self) -> (UInt32, UInt32) {
        (
            UInt32::as_unsigned((self.0 >> 32) as i32),
            UInt32::as_unsigned(self.0 as i32),
        )
    }

    /// The two's-complement bit pattern of this value.
    pub const fn bits(self) -> i64 {
        self.0
    }

    /// The native unsigned value.
    pub const fn get(self) -> u64 {
        self.0 as u64
    }

    /// Unsigned comparison of the two bit patterns.
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

    pub fn is_positive(self) -> bool {
        self.greater_than(Self::ZERO)
    }

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

    /// Logical left shift. Distances of 64 or more yield zero.
    pub fn shift_left(self, distance: UInt8) -> Self {
        if distance.gte(Self::WIDTH) {
            return Self::ZERO;
        }

        Self::as_unsigned(self.0 << distance.get())
    }

    /// Logical right shift. Distances of 64 or more yield zero.
    pub fn shift_right(self, distance: UInt8) -> Self {
        if distance.gte(Self::WIDTH) {
            return Self::ZERO;
        }

        Self::as_unsigned((self.get() >> distance.get()) as i64)
    }

    /// Returns `(carry, (self + other) mod 2^64)`.
    pub fn plus(self, other: Self) -> Pair<bool, Self> {
        let sum = self.0.wrapping_add(other.0);
        let carry = carry_out(self.0 < 0, other.0 < 0, sum < 0);

        Pair::new(carry, Self::as_unsigned(sum))
    }

    pub fn plus_one(self) -> Pair<bool, Self> {
        self.plus(Self::ONE)
    }

    /// Returns `(other > self, (self - other) mod 2^64)`.
    pub fn minus(self, other: Self) -> Pair<bool, Self> {
        let borrow = other.greater_than(self);
        let negated = other.complement().plus_one().snd();

        self.plus(negated).map_fst(|_| borrow)
    }

    /// Returns the full 128-bit product as `(high, low)` halves.
    pub fn times(self, other: Self) -> Pair<Self, Self> {
        let [r3, r2, r1, r0] = word::schoolbook(self.limbs(), other.limbs());

        Pair::new(Self::from_limbs(r3, r2), Self::from_limbs(r1, r0))
    }

    /// Returns `(quotient, remainder)`.
    ///
    /// # Errors
    /// [`ArithmeticError::DivisionByZero`](crate::ArithmeticError) when
    /// `divisor` is zero.
    pub fn div_mod(self, divisor: Self) -> Result<Pair<Self, Self>> {
        word::restoring_div_mod(self, divisor)
    }
}

impl Word for UInt64 {
    const BITS: u32 = 64;
    const ZERO: Self = UInt64::ZERO;
    const ONE: Self = UInt64::ONE;

    fn top_bit_set(self) -> bool {
        self.0 < 0
    }

    fn plus(self, other: Self) -> Pair<bool, Self> {
        UInt64::plus(self, other)
    }

    fn minus(self, other: Self) -> Pair<bool, Self> {
        UInt64::minus(self, other)
    }

    fn times(self, other: Self) -> Pair<Self, Self> {
        UInt64::times(self, other)
    }

    fn shift_left(self, distance: UInt8) -> Self {
        UInt64::shift_left(self, distance)
    }

    fn shift_right(self, distance: UInt8) -> Self {
        UInt64::shift_right(self, distance)
    }

    fn or(self, other: Self) -> Self {
        UInt64::or(self, other)
    }
}
