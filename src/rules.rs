use crate::{
    basic::{BAR, FOO},
    Classification, Error, Result,
};
use serde::Deserialize;
use std::borrow::Cow;

/// Label printed in place of multiples of `divisor`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub divisor: u64,
    pub label: String,
}
//
impl Rule {
    pub fn new(divisor: u64, label: impl Into<String>) -> Self {
        Self {
            divisor,
            label: label.into(),
        }
    }

    /// Truth that this rule applies to `n`
    ///
    /// A zero divisor never applies. Such rules are rejected by
    /// [`Rules::new()`] anyway.
    #[inline]
    pub fn divides(&self, n: u64) -> bool {
        n.checked_rem(self.divisor) == Some(0)
    }
}

/// The Foo/Bar rules
pub fn default_rules() -> Vec<Rule> {
    vec![Rule::new(3, FOO), Rule::new(5, BAR)]
}

/// Validated, ordered set of divisor rules
///
/// A value matching several rules gets their labels concatenated in rule
/// order, unless every rule matches and an explicit `combined` label was
/// provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    rules: Vec<Rule>,
    combined: Option<String>,
}
//
impl Rules {
    /// Check and assemble a set of rules
    pub fn new(rules: Vec<Rule>, combined: Option<String>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.divisor == 0 {
                return Err(Error::ZeroDivisor { index });
            }
            if rule.label.is_empty() {
                return Err(Error::EmptyLabel { index });
            }
        }
        if combined.as_deref() == Some("") {
            return Err(Error::EmptyCombinedLabel);
        }
        Ok(Self { rules, combined })
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Explicit label for values that match every rule
    pub fn combined(&self) -> Option<&str> {
        self.combined.as_deref()
    }

    /// Classify `n`
    pub fn classify(&self, n: u64) -> Classification<'_> {
        let mut labels = self
            .rules
            .iter()
            .filter(|rule| rule.divides(n))
            .map(|rule| rule.label.as_str());
        let Some(first) = labels.next() else {
            return Classification::Number(n);
        };

        if let Some(combined) = &self.combined {
            if self.rules.iter().all(|rule| rule.divides(n)) {
                return Classification::Label(Cow::Borrowed(combined));
            }
        }

        match labels.next() {
            None => Classification::Label(Cow::Borrowed(first)),
            Some(second) => {
                let mut label = String::with_capacity(first.len() + second.len());
                label.push_str(first);
                label.push_str(second);
                label.extend(labels);
                Classification::Label(Cow::Owned(label))
            }
        }
    }

    /// Least common multiple of all divisors, after which classifications
    /// repeat
    ///
    /// Returns `None` if it does not fit in a `u64`.
    pub fn period(&self) -> Option<u64> {
        self.rules
            .iter()
            .try_fold(1u64, |acc, rule| lcm(acc, rule.divisor))
    }
}
//
impl Default for Rules {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            combined: None,
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
