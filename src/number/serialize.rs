//! `serde` support, enabled by the `serde` feature
//!
//! Every width is written as its native unsigned value, so a `UInt32`
//! holding `0xFFFF_FFFF` serializes as `4294967295` rather than as the `-1`
//! of its bit pattern.

use crate::number::{UInt8, UInt16, UInt32, UInt64, UInt128};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_serde {
    ($($name:ident => $native:ty),+ $(,)?) => {
        $(
            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    self.get().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    <$native>::deserialize(deserializer).map($name::from)
                }
            }
        )+
    };
}

impl_serde!(
    UInt8 => u8,
    UInt16 => u16,
    UInt32 => u32,
    UInt64 => u64,
    UInt128 => u128,
);
