//! 128-bit unsigned integer primitive
//!
//! `UInt128` is stored as two `i64` bit patterns, `high` being the more
//! significant 64 bits:
//!
//! ```text
//! value = unsigned(high) * 2^64 + unsigned(low)
//! ```
//!
//! Arithmetic never widens beyond 64 bits: each operation is composed from
//! the corresponding `UInt64` operation on the two limbs.

use crate::error::Result;
use crate::number::word::{self, Word};
use crate::number::{UInt8, UInt64};
use crate::pair::Pair;

use once_cell::sync::Lazy;
use std::cmp::Ordering;

/// Unsigned 128-bit integer backed by a `(high, low)` pair of `i64`
/// bit patterns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt128 {
    pub(crate) high: i64,
    pub(crate) low: i64,
}

static CACHE: Lazy<[UInt128; 256]> = Lazy::new(|| {
    tracing::trace!(width = 128, "populated small-value cache");
    std::array::from_fn(|i| UInt128 {
        high: 0,
        low: i as i64,
    })
});

impl UInt128 {
    /// The value zero.
    pub const ZERO: Self = Self { high: 0, low: 0 };

    /// The value one.
    pub const ONE: Self = Self { high: 0, low: 1 };

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self { high: -1, low: -1 };

    /// The bit width, as a shift distance.
    pub const WIDTH: UInt8 = UInt8(128u8 as i8);

    /// Returns the value whose upper 64 bits are `high` and lower 64 bits
    /// are `low`.
    pub fn as_unsigned(high: i64, low: i64) -> Self {
        match Self::cached(high, low) {
            Some(shared) => *shared,
            None => Self { high, low },
        }
    }

    /// Returns the shared instance when `high` is zero and the unsigned
    /// value of `low` is in `0..=255`.
    pub fn cached(high: i64, low: i64) -> Option<&'static Self> {
        if high != 0 {
            return None;
        }

        let table: &'static [UInt128; 256] = &CACHE;

        usize::try_from(low as u64)
            .ok()
            .and_then(|index| table.get(index))
    }

    pub fn from_limbs(high: UInt64, low: UInt64) -> Self {
        Self::as_unsigned(high.bits(), low.bits())
    }

    /// Splits the value into `(high, low)` 64-bit limbs.
    pub fn limbs(self) -> (UInt64, UInt64) {
        (UInt64::as_unsigned(self.high), UInt64::as_unsigned(self.low))
    }

    /// The `(high, low)` bit patterns of this value.
    pub const fn bits(self) -> (i64, i64) {
        (self.high, self.low)
    }

    pub const fn high(self) -> i64 {
        self.high
    }

    pub const fn low(self) -> i64 {
        self.low
    }

    /// The native unsigned value.
    pub const fn get(self) -> u128 {
        ((self.high as u64 as u128) << 64) | self.low as u64 as u128
    }

    /// Unsigned comparison: high limbs first, low limbs on a tie.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        let (a_hi, a_lo) = self.limbs();
        let (b_hi, b_lo) = other.limbs();

        match a_hi.compare_to(&b_hi) {
            Ordering::Equal => a_lo.compare_to(&b_lo),
            unequal => unequal,
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
        Self::as_unsigned(!self.high, !self.low)
    }

    pub fn and(self, other: Self) -> Self {
        Self::as_unsigned(self.high & other.high, self.low & other.low)
    }

    pub fn or(self, other: Self) -> Self {
        Self::as_unsigned(self.high | other.high, self.low | other.low)
    }

    pub fn xor(self, other: Self) -> Self {
        Self::as_unsigned(self.high ^ other.high, self.low ^ other.low)
    }

    /// Logical left shift across both limbs.
    ///
    /// Distances of 128 or more yield zero. From 64 on, the low limb moves
    /// into the high limb and the low limb is zero-filled.
    pub fn shift_left(self, distance: UInt8) -> Self {
        if distance.gte(Self::WIDTH) {
            return Self::ZERO;
        }

        let d = u32::from(distance.get());
        let low = self.low as u64;

        match d {
            0 => self,
            64.. => Self::as_unsigned(self.low << (d - 64), 0),
            _ => Self::as_unsigned(
                (self.high << d) | (low >> (64 - d)) as i64,
                self.low << d,
            ),
        }
    }

    /// Logical right shift across both limbs.
    ///
    /// Distances of 128 or more yield zero. From 64 on, the high limb moves
    /// into the low limb and the high limb is zero-filled.
    pub fn shift_right(self, distance: UInt8) -> Self {
        if distance.gte(Self::WIDTH) {
            return Self::ZERO;
        }

        let d = u32::from(distance.get());
        let (high, low) = (self.high as u64, self.low as u64);

        match d {
            0 => self,
            64.. => Self::as_unsigned(0, (high >> (d - 64)) as i64),
            _ => Self::as_unsigned((high >> d) as i64, ((low >> d) | (high << (64 - d))) as i64),
        }
    }

    /// Returns `(carry, (self + other) mod 2^128)`.
    ///
    /// Two-limb ripple-carry add: the carry of the low limbs is added into
    /// the high limb sum. At most one of the two high-limb additions can
    /// carry.
    pub fn plus(self, other: Self) -> Pair<bool, Self> {
        let (a_hi, a_lo) = self.limbs();
        let (b_hi, b_lo) = other.limbs();

        let low = a_lo.plus(b_lo);
        let high = a_hi.plus(b_hi);
        let rippled = if low.fst() {
            high.snd().plus_one()
        } else {
            Pair::new(false, high.snd())
        };

        Pair::new(
            high.fst() || rippled.fst(),
            Self::from_limbs(rippled.snd(), low.snd()),
        )
    }

    pub fn plus_one(self) -> Pair<bool, Self> {
        self.plus(Self::ONE)
    }

    /// Returns `(other > self, (self - other) mod 2^128)`.
    pub fn minus(self, other: Self) -> Pair<bool, Self> {
        let borrow = other.greater_than(self);
        let negated = other.complement().plus_one().snd();

        self.plus(negated).map_fst(|_| borrow)
    }

    /// Returns the full 256-bit product as `(high, low)` halves.
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

impl Word for UInt128 {
    const BITS: u32 = 128;
    const ZERO: Self = UInt128::ZERO;
    const ONE: Self = UInt128::ONE;

    fn top_bit_set(self) -> bool {
        self.high < 0
    }

    fn plus(self, other: Self) -> Pair<bool, Self> {
        UInt128::plus(self, other)
    }

    fn minus(self, other: Self) -> Pair<bool, Self> {
        UInt128::minus(self, other)
    }

    fn times(self, other: Self) -> Pair<Self, Self> {
        UInt128::times(self, other)
    }

    fn shift_left(self, distance: UInt8) -> Self {
        UInt128::shift_left(self, distance)
    }

    fn shift_right(self, distance: UInt8) -> Self {
        UInt128::shift_right(self, distance)
    }

    fn or(self, other: Self) -> Self {
        UInt128::or(self, other)
    }
}
