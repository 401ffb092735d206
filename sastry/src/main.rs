//! Sastry / Apocalyptic number classifier.
//!
//! Reads three integers from stdin, validates them, and reports each one,
//! largest first, with its Sastry and Apocalyptic flags.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sastry::classify::classify_reader;
use sastry::core::sastry::sastry_numbers;
use sastry::exit_codes;
use sastry::logging;
use sastry::report::{Format, write_outcome};
use tracing::info;

/// Upper bound accepted by `sastry scan`.
const SCAN_MAX: u32 = 9999;

#[derive(Parser)]
#[command(
    name = "sastry",
    version,
    about = "Classify three natural numbers as Sastry and Apocalyptic numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read three integers from stdin and report them largest first (default).
    Classify {
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print every Sastry number in an inclusive range.
    Scan {
        #[arg(long, default_value_t = 1)]
        from: u32,
        #[arg(long, default_value_t = SCAN_MAX)]
        to: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Classify {
            format: Format::Text,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_default() {
        Command::Classify { format } => cmd_classify(format),
        Command::Scan { from, to } => cmd_scan(from, to),
    }
}

fn cmd_classify(format: Format) -> Result<()> {
    let outcome = classify_reader(io::stdin().lock())?;
    let mut stdout = io::stdout().lock();
    write_outcome(&mut stdout, &outcome, format)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_scan(from: u32, to: u32) -> Result<()> {
    let range = scan_range(from, to)?;
    info!(from, to, "scanning for sastry numbers");
    let mut stdout = io::stdout().lock();
    for n in sastry_numbers(range) {
        writeln!(stdout, "{n}").context("write stdout")?;
    }
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn scan_range(from: u32, to: u32) -> Result<RangeInclusive<u32>> {
    if from == 0 {
        bail!("--from must be >= 1");
    }
    if to > SCAN_MAX {
        bail!("--to must be <= {SCAN_MAX}");
    }
    if from > to {
        bail!("--from {from} is greater than --to {to}");
    }
    Ok(from..=to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_subcommand_defaults_to_classify() {
        let cli = Cli::parse_from(["sastry"]);
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Classify {
                format: Format::Text
            }
        ));
    }

    #[test]
    fn parse_classify_json() {
        let cli = Cli::parse_from(["sastry", "classify", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Classify {
                format: Format::Json
            })
        ));
    }

    #[test]
    fn parse_scan_defaults() {
        let cli = Cli::parse_from(["sastry", "scan"]);
        assert!(matches!(
            cli.command,
            Some(Command::Scan { from: 1, to: 9999 })
        ));
    }

    #[test]
    fn scan_range_rejects_bad_bounds() {
        assert!(scan_range(0, 10).is_err());
        assert!(scan_range(1, 10_000).is_err());
        let err = scan_range(20, 10).expect_err("should fail");
        assert!(err.to_string().contains("greater than"));
        assert_eq!(scan_range(1, 9999).expect("range"), 1..=9999);
    }
}
