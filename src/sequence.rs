use std::ops::RangeInclusive;

/// Inclusive range of counter values
///
/// A sequence whose start lies past its end is empty rather than invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub start: u64,
    pub end: u64,
}
//
impl Sequence {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Truth that this sequence yields no value
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of values in the sequence
    ///
    /// This is a `u128` because `0..=u64::MAX` has `u64::MAX + 1` values.
    pub fn len(&self) -> u128 {
        if self.is_empty() {
            0
        } else {
            u128::from(self.end - self.start) + 1
        }
    }
}
//
impl Default for Sequence {
    fn default() -> Self {
        Self::new(1, crate::basic::UPPER_BOUND)
    }
}
//
impl IntoIterator for Sequence {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}
