use crate::{cycle::Cycle, rules::Rules, sequence::Sequence, Classification};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Writes classifications to an output sink, one per line
///
/// Uses a precomputed [`Cycle`] when the rules' period is short enough, and
/// evaluates the rules directly otherwise.
#[derive(Clone, Debug)]
pub struct Printer {
    rules: Rules,
    cycle: Option<Cycle>,
}
//
impl Printer {
    pub fn new(rules: Rules) -> Self {
        let cycle = Cycle::new(&rules);
        match (&cycle, rules.period()) {
            (Some(cycle), _) => debug!(period = cycle.period(), "Using period table"),
            (None, Some(period)) => warn!(
                period,
                max_period = Cycle::MAX_PERIOD,
                "Period too long to tabulate, evaluating rules for every value"
            ),
            (None, None) => warn!("Period overflows u64, evaluating rules for every value"),
        }
        Self { rules, cycle }
    }

    /// Rules being applied
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Classify `n`
    #[inline]
    pub fn classify(&self, n: u64) -> Classification<'_> {
        match &self.cycle {
            Some(cycle) => cycle.classify(n),
            None => self.rules.classify(n),
        }
    }

    /// Write one line per value of `sequence`, tell how many were written
    pub fn write(&self, out: &mut impl Write, sequence: Sequence) -> io::Result<u64> {
        if sequence.is_empty() {
            debug!(?sequence, "Empty sequence, nothing to write");
            return Ok(0);
        }
        let mut lines = 0;
        for n in sequence {
            writeln!(out, "{}", self.classify(n))?;
            lines += 1;
        }
        Ok(lines)
    }
}
//
impl Default for Printer {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
