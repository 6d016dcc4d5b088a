use crate::{rules::Rules, Classification};
use std::borrow::Cow;

/// Classifications of one full period of a set of rules
///
/// Whether a divisor `d` divides `n` only depends on `n % period` when `d`
/// divides `period`, so after precomputing one period of labels, classifying
/// any value is a single table lookup with no string concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Label for each residue, `None` means the value itself is printed
    table: Vec<Option<String>>,
}
//
impl Cycle {
    /// Longest period that we are willing to tabulate
    pub const MAX_PERIOD: u64 = 1 << 16;

    /// Tabulate the classifications of `rules`
    ///
    /// Returns `None` if the period is longer than `MAX_PERIOD` or overflows.
    pub fn new(rules: &Rules) -> Option<Self> {
        let period = rules.period().filter(|&period| period <= Self::MAX_PERIOD)?;
        let table = (0..period)
            .map(|residue| match rules.classify(residue) {
                Classification::Number(_) => None,
                Classification::Label(label) => Some(label.into_owned()),
            })
            .collect();
        Some(Self { table })
    }

    /// Number of consecutive values after which classifications repeat
    pub fn period(&self) -> u64 {
        self.table.len() as u64
    }

    /// Classify `n`
    #[inline]
    pub fn classify(&self, n: u64) -> Classification<'_> {
        match &self.table[(n % self.period()) as usize] {
            Some(label) => Classification::Label(Cow::Borrowed(label)),
            None => Classification::Number(n),
        }
    }
}
