//! Conversions between `UInt64` and native numbers
//!
//! Narrowing accessors keep the low-order bits. Floating point accessors
//! return the true non-negative value.

use super::UInt64;

/// 2⁶⁴, the amount a set sign bit understates an `i64` pattern by.
pub(crate) const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

impl UInt64 {
    pub fn byte_value(self) -> i8 {
        self.0 as i8
    }

    pub fn short_value(self) -> i16 {
        self.0 as i16
    }

    pub fn int_value(self) -> i32 {
        self.0 as i32
    }

    pub fn long_value(self) -> i64 {
        self.0
    }

    /// The closest `f32`, rounded through [`double_value`](Self::double_value).
    pub fn float_value(self) -> f32 {
        self.double_value() as f32
    }

    pub fn double_value(self) -> f64 {
        let signed = self.0 as f64;

        if self.0 < 0 { signed + TWO_POW_64 } else { signed }
    }
}

impl From<u64> for UInt64 {
    fn from(value: u64) -> Self {
        UInt64::as_unsigned(value as i64)
    }
}

impl From<UInt64> for u64 {
    fn from(value: UInt64) -> Self {
        value.get()
    }
}
