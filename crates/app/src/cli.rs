//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Prints the FizzBuzz sequence for 1..=N, one token per line.
#[derive(Debug, Parser)]
#[command(name = "fizzbuzz", version, about)]
pub struct Cli {
    /// Last number to print. Falls back to FIZZBUZZ_MAX, then 100.
    #[arg(short = 'n', long = "max", allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// JSON or YAML rule file. Falls back to FIZZBUZZ_RULES, then the standard rules.
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Print the effective rules instead of the sequence.
    #[arg(long)]
    pub list_rules: bool,
}
