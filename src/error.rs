//! Error types for configuration loading and output

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible foobar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong outside of classification itself
///
/// Classification is a total function, so every variant here comes either
/// from a user-provided configuration or from the output sink.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be read
    #[error("cannot read configuration file {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has unexpected keys
    #[error("invalid configuration: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A rule would divide by zero
    #[error("rule #{index} has a zero divisor")]
    ZeroDivisor { index: usize },

    /// A rule would print an empty line in place of a number
    #[error("rule #{index} has an empty label")]
    EmptyLabel { index: usize },

    /// Values matching every rule would print an empty line
    #[error("combined label is empty")]
    EmptyCombinedLabel,

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
