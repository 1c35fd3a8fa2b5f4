//! Two-element value envelope
//!
//! `Pair` is the return type of every multi-valued arithmetic operation in
//! the crate. It is a plain immutable record: both elements are always
//! present, and mapping one element leaves the other untouched.

/// An immutable pair of values.
///
/// The arithmetic operations use it as:
/// - `(carry, sum)` for [`plus`](crate::UInt32::plus)
/// - `(borrow, difference)` for [`minus`](crate::UInt32::minus)
/// - `(high, low)` for [`times`](crate::UInt32::times)
/// - `(quotient, remainder)` for [`div_mod`](crate::UInt32::div_mod)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<A, B> {
    fst: A,
    snd: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(fst: A, snd: B) -> Self {
        Pair { fst, snd }
    }

    /// Returns the first element.
    pub fn fst(self) -> A {
        self.fst
    }

    /// Returns the second element.
    pub fn snd(self) -> B {
        self.snd
    }

    /// Borrows both elements without consuming the pair.
    pub fn as_ref(&self) -> Pair<&A, &B> {
        Pair::new(&self.fst, &self.snd)
    }

    pub fn into_inner(self) -> (A, B) {
        (self.fst, self.snd)
    }

    /// Replaces the first element with `f(fst)`, keeping the second.
    pub fn map_fst<C>(self, f: impl FnOnce(A) -> C) -> Pair<C, B> {
        Pair::new(f(self.fst), self.snd)
    }

    /// Replaces the second element with `f(snd)`, keeping the first.
    pub fn map_snd<C>(self, f: impl FnOnce(B) -> C) -> Pair<A, C> {
        Pair::new(self.fst, f(self.snd))
    }

    /// Maps both elements independently.
    pub fn map<C, D>(self, f_fst: impl FnOnce(A) -> C, f_snd: impl FnOnce(B) -> D) -> Pair<C, D> {
        Pair::new(f_fst(self.fst), f_snd(self.snd))
    }

    /// Maps the pair as a whole into a new pair.
    pub fn and_then<C, D>(self, f: impl FnOnce(A, B) -> Pair<C, D>) -> Pair<C, D> {
        f(self.fst, self.snd)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((fst, snd): (A, B)) -> Self {
        Pair::new(fst, snd)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_inner()
    }
}

/// Serialized as a 2-tuple `(fst, snd)`.
#[cfg(feature = "serde")]
impl<A: serde::Serialize, B: serde::Serialize> serde::Serialize for Pair<A, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(&self.fst, &self.snd), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>, B: serde::Deserialize<'de>> serde::Deserialize<'de>
    for Pair<A, B>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <(A, B) as serde::Deserialize<'de>>::deserialize(deserializer).map(Pair::from)
    }
}
