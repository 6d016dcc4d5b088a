//! User configuration
//!
//! Everything is optional, so an empty file (or no file at all) reproduces
//! the Foo/Bar output for 1 to 100. An example configuration:
//!
//! ```toml
//! start = 1
//! end = 100
//! combined = "FooBar"
//!
//! [[rules]]
//! divisor = 3
//! label = "Foo"
//!
//! [[rules]]
//! divisor = 5
//! label = "Bar"
//! ```

use crate::{
    basic::UPPER_BOUND,
    rules::{self, Rule, Rules},
    sequence::Sequence,
    Error, Result,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// First value to classify
    pub start: u64,

    /// Last value to classify (inclusive)
    #[serde(alias = "upper_bound")]
    pub end: u64,

    /// Divisor rules, in evaluation order
    pub rules: Vec<Rule>,

    /// Label for values matching every rule, instead of concatenating labels
    pub combined: Option<String>,
}
//
impl Config {
    /// Parse a TOML configuration
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line bounds on top of this configuration
    ///
    /// Bounds that are `None` keep their configured value.
    pub fn with_overrides(mut self, start: Option<u64>, end: Option<u64>) -> Self {
        if let Some(start) = start {
            self.start = start;
        }
        if let Some(end) = end {
            self.end = end;
        }
        self
    }

    /// Values to be classified
    pub fn sequence(&self) -> Sequence {
        Sequence::new(self.start, self.end)
    }

    /// Validated divisor rules
    pub fn rules(&self) -> Result<Rules> {
        Rules::new(self.rules.clone(), self.combined.clone())
    }
}
//
impl Default for Config {
    fn default() -> Self {
        Self {
            start: 1,
            end: UPPER_BOUND,
            rules: rules::default_rules(),
            combined: None,
        }
    }
}
