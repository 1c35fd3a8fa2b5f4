//! Conversions between `UInt128` and native numbers

use super::UInt128;
use crate::number::uint64::TWO_POW_64;

impl UInt128 {
    pub fn byte_value(self) -> i8 {
        self.low as i8
    }

    pub fn short_value(self) -> i16 {
        self.low as i16
    }

    pub fn int_value(self) -> i32 {
        self.low as i32
    }

    /// The low 64 bits, reinterpreted as signed.
    pub fn long_value(self) -> i64 {
        self.low
    }

    pub fn float_value(self) -> f32 {
        self.double_value() as f32
    }

    /// `high * 2^64 + low`, with both limbs taken as unsigned.
    pub fn double_value(self) -> f64 {
        let (high, low) = self.limbs();

        high.double_value() * TWO_POW_64 + low.double_value()
    }
}

impl From<u128> for UInt128 {
    fn from(value: u128) -> Self {
        UInt128::as_unsigned((value >> 64) as i64, value as i64)
    }
}

impl From<UInt128> for u128 {
    fn from(value: UInt128) -> Self {
        value.get()
    }
}
