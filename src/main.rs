use anyhow::Context;
use clap::Parser;
use foobar::{printer::Printer, Config};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

/// Print the integers from 1 to 100, replacing multiples of 3 with "Foo",
/// multiples of 5 with "Bar" and multiples of both with "FooBar"
#[derive(Parser, Debug)]
#[command(name = "foobar", version, about, long_about = None)]
struct Cli {
    /// TOML file with custom bounds and divisor rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First value to classify
    #[arg(long)]
    start: Option<u64>,

    /// Last value to classify (inclusive)
    #[arg(long, visible_alias = "upper-bound")]
    end: Option<u64>,

    /// Enable verbose logging on stderr (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    trace!(?cli, "Parsed command line");

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    }
    .with_overrides(cli.start, cli.end);
    debug!(?config, "Effective configuration");

    let printer = Printer::new(config.rules().context("Invalid divisor rules")?);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = printer
        .write(&mut out, config.sequence())
        .and_then(|lines| {
            out.flush()?;
            Ok(lines)
        });
    match result {
        Ok(lines) => {
            info!(lines, "Finished writing classifications");
            Ok(())
        }
        // Reader went away (e.g. `foobar | head`), nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to print classifications"),
    }
}
