//! Shared limb arithmetic
//!
//! The five integer types do not share a base type. This module holds the
//! crate-private `Word` contract they all satisfy, so that the algorithms
//! that only need the contract (schoolbook multiplication over two limbs
//! and restoring long division) are written once.

use crate::error::{ArithmeticError, Result};
use crate::number::UInt8;
use crate::pair::Pair;

use tracing::debug;

/// Carry-out of an N-bit addition, from the top bits of both operands and
/// of the wrapped sum.
///
/// Both top bits set always carries. Exactly one set carries iff the sum
/// lost its top bit.
pub(crate) const fn carry_out(a_top: bool, b_top: bool, sum_top: bool) -> bool {
    (a_top && b_top) || ((a_top || b_top) && !sum_top)
}

/// Operation contract common to every fixed-width type.
pub(crate) trait Word: Copy + Ord {
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Whether the most significant bit is set, i.e. the value lies in the
    /// upper half of the range.
    fn top_bit_set(self) -> bool;
    fn plus(self, other: Self) -> Pair<bool, Self>;
    fn minus(self, other: Self) -> Pair<bool, Self>;
    fn times(self, other: Self) -> Pair<Self, Self>;
    fn shift_left(self, distance: UInt8) -> Self;
    fn shift_right(self, distance: UInt8) -> Self;
    fn or(self, other: Self) -> Self;
}

/// Adds `addend` into `acc`, counting a carry-out into `carries`.
fn accumulate<L: Word>(acc: L, addend: L, carries: &mut L) -> L {
    let sum = acc.plus(addend);

    if sum.fst() {
        *carries = carries.plus(L::ONE).snd();
    }

    sum.snd()
}

/// Multiplies two operands given as `(high, low)` limbs.
///
/// Returns the four limbs of the double-width product, most significant
/// first. With `w` the limb width:
///
/// ```text
/// a * b = hh * 2^(2w) + (lh + hl) * 2^w + ll
/// ```
///
/// where each partial product is itself a two-limb `(high, low)` pair.
/// The column sums are rippled upwards: column 1 can carry at most twice,
/// column 2 likewise, and column 3 cannot carry since the product is below
/// 2^(4w).
pub(crate) fn schoolbook<L: Word>((a_hi, a_lo): (L, L), (b_hi, b_lo): (L, L)) -> [L; 4] {
    let ll = a_lo.times(b_lo);
    let lh = a_lo.times(b_hi);
    let hl = a_hi.times(b_lo);
    let hh = a_hi.times(b_hi);

    let r0 = ll.snd();

    let mut c1 = L::ZERO;
    let r1 = accumulate(ll.fst(), lh.snd(), &mut c1);
    let r1 = accumulate(r1, hl.snd(), &mut c1);

    let mut c2 = L::ZERO;
    let r2 = accumulate(hh.snd(), lh.fst(), &mut c2);
    let r2 = accumulate(r2, hl.fst(), &mut c2);
    let r2 = accumulate(r2, c1, &mut c2);

    let r3 = hh.fst().plus(c2).snd();

    [r3, r2, r1, r0]
}

/// Restoring binary long division.
///
/// The divisor is first aligned under the dividend: it is doubled while its
/// top bit is clear (so no bit is shifted out) and the doubled value still
/// does not exceed the dividend. The alignment is then undone one bit at a
/// time, producing one quotient bit per step.
pub(crate) fn restoring_div_mod<W: Word>(dividend: W, divisor: W) -> Result<Pair<W, W>> {
    if divisor == W::ZERO {
        debug!(width = W::BITS, "rejected division by zero");
        return Err(ArithmeticError::DivisionByZero);
    }

    let one = UInt8::ONE;
    let mut shifted = divisor;
    let mut steps = 0u32;

    while !shifted.top_bit_set() {
        let next = shifted.shift_left(one);
        if next > dividend {
            break;
        }

        shifted = next;
        steps += 1;
    }

    let mut quotient = W::ZERO;
    let mut remainder = dividend;

    for _ in 0..=steps {
        quotient = quotient.shift_left(one);

        if shifted <= remainder {
            remainder = remainder.minus(shifted).snd();
            quotient = quotient.or(W::ONE);
        }

        shifted = shifted.shift_right(one);
    }

    Ok(Pair::new(quotient, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{UInt32, UInt64};

    #[test]
    fn carry_out_truth_table() {
        assert!(!carry_out(false, false, false));
        assert!(!carry_out(false, false, true));
        assert!(carry_out(true, false, false));
        assert!(!carry_out(true, false, true));
        assert!(carry_out(false, true, false));
        assert!(!carry_out(false, true, true));
        assert!(carry_out(true, true, false));
        assert!(carry_out(true, true, true));
    }

    #[test]
    fn schoolbook_max_limbs() {
        let max = (UInt32::MAX, UInt32::MAX);
        let [r3, r2, r1, r0] = schoolbook(max, max);

        // (2^64 - 1)^2 = 0xFFFFFFFF_FFFFFFFE_00000000_00000001
        assert_eq!(r3, UInt32::from(0xFFFF_FFFFu32));
        assert_eq!(r2, UInt32::from(0xFFFF_FFFEu32));
        assert_eq!(r1, UInt32::ZERO);
        assert_eq!(r0, UInt32::ONE);
    }

    #[test]
    fn schoolbook_propagates_double_column_carry() {
        let a = (UInt32::MAX, UInt32::MAX);
        let b = (UInt32::ONE, UInt32::MAX);
        let [r3, r2, r1, r0] = schoolbook(a, b);

        let expected = u128::from(u64::MAX) * 0x1_FFFF_FFFFu128;
        let limbs = [
            (expected >> 96) as u32,
            (expected >> 64) as u32,
            (expected >> 32) as u32,
            expected as u32,
        ];

        assert_eq!([r3, r2, r1, r0].map(UInt32::get), limbs);
    }

    #[test]
    fn restoring_div_mod_rejects_zero() {
        assert_eq!(
            restoring_div_mod(UInt64::ZERO, UInt64::ZERO),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn restoring_div_mod_top_bit_divisor() {
        let dividend = UInt64::MAX;
        let divisor = UInt64::from(0x8000_0000_0000_0001u64);
        let result = restoring_div_mod(dividend, divisor).unwrap();

        assert_eq!(result.fst(), UInt64::ONE);
        assert_eq!(result.snd(), UInt64::from(0x7FFF_FFFF_FFFF_FFFEu64));
    }
}
