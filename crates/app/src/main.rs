//! FizzBuzz - Main Entry Point
//!
//! Resolves configuration from the command line and environment, then
//! writes the sequence (or the rule listing) to standard output.

mod cli;

use clap::Parser;
use fizzbuzz_application::{
    ApplicationResult, DescribeRules, PrintSequence, PrintSequenceInput, RuleSource,
};
use fizzbuzz_domain::{DEFAULT_MAX_NUMBER, Generator, RuleSet};
use fizzbuzz_infrastructure::{FileRuleSource, Settings, StdoutSink};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the sequence
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    run(cli, settings)?;

    Ok(())
}

fn run(cli: Cli, settings: Settings) -> ApplicationResult<()> {
    let max_number = cli
        .max
        .or(settings.max_number)
        .unwrap_or(DEFAULT_MAX_NUMBER);

    let source: Box<dyn RuleSource> = match cli.rules.or(settings.rules_path) {
        Some(path) => Box::new(FileRuleSource::new(path)),
        None => Box::new(RuleSet::standard()),
    };
    let rules = source.load()?;

    tracing::debug!(max_number, rules = rules.len(), "starting");

    if cli.list_rules {
        let output = DescribeRules::new(StdoutSink::stdout()).execute(&rules)?;
        tracing::debug!(
            rules_written = output.rules_written,
            closed_early = output.closed_early,
            "finished"
        );
        return Ok(());
    }

    let output = PrintSequence::new(Generator::new(rules), StdoutSink::stdout())
        .execute(PrintSequenceInput { max_number })?;
    tracing::debug!(
        lines_written = output.lines_written,
        closed_early = output.closed_early,
        "finished"
    );

    Ok(())
}
