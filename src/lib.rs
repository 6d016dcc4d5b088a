pub mod basic;
pub mod classification;
pub mod config;
pub mod cycle;
pub mod error;
pub mod printer;
pub mod rules;
pub mod sequence;

pub use classification::Classification;
pub use config::Config;
pub use error::{Error, Result};

use std::io::{self, Write};
use tracing::info;

/// Print the classification of every integer from 1 to 100 to stdout
pub fn run() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    basic::write_to(&mut out)?;
    out.flush()
}

/// Write the classifications requested by `config` to `out`, tell how many
/// lines were written
pub fn run_with(config: &Config, out: &mut impl Write) -> Result<u64> {
    let printer = printer::Printer::new(config.rules()?);
    let lines = printer.write(out, config.sequence())?;
    info!(lines, "Finished writing classifications");
    Ok(lines)
}
