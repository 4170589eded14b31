//! Siamese CLI.
//!
//! Generate and print odd-order magic squares.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use siamese::prelude::*;

#[derive(Parser)]
#[command(name = "siamese")]
#[command(about = "Generate odd-order magic squares with the Siamese method")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Square sizes to generate (odd, at least 1)
    #[arg(default_values_t = vec![3i64])]
    sizes: Vec<i64>,

    /// Stepping rule
    #[arg(long, value_enum, default_value_t = Rule::Inverted)]
    rule: Rule,

    /// Check every row, column and diagonal before printing
    #[arg(long)]
    verify: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    /// Start bottom-middle, step down-right, fall back up
    Inverted,
    /// Textbook: start top-middle, step up-right, fall back down
    Classic,
}

impl From<Rule> for StepRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Inverted => StepRule::Inverted,
            Rule::Classic => StepRule::Classic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Generate and print one square per requested size.
///
/// Stops at the first invalid size; squares already written stay written.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = GeneratorConfig {
        rule: cli.rule.into(),
        verify: cli.verify,
    };

    for &size in &cli.sizes {
        let order = Order::try_from(size)
            .with_context(|| format!("cannot build a square of size {size}"))?;
        let square = Generator::run(order, config)
            .with_context(|| format!("generation failed for size {order}"))?;
        info!(order = order.get(), rule = %config.rule, "generated magic square");

        writeln!(out, "Magic square of size {order}\n")?;
        write!(out, "{square}")?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(args: &[&str]) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(std::iter::once("siamese").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    const INVERTED_THREE: &str = "\
Magic square of size 3

-------
|4|9|2|
-------
|3|5|7|
-------
|8|1|6|
-------

";

    #[test]
    fn prints_header_blank_line_and_square() {
        let (result, out) = output_for(&["3"]);
        result.unwrap();
        assert_eq!(out, INVERTED_THREE);
    }

    #[test]
    fn default_size_is_three() {
        let cli = Cli::try_parse_from(["siamese"]).unwrap();
        assert_eq!(cli.sizes, vec![3]);
        let (result, out) = output_for(&[]);
        result.unwrap();
        assert_eq!(out, INVERTED_THREE);
    }

    #[test]
    fn classic_rule_flag() {
        let (result, out) = output_for(&["3", "--rule", "classic"]);
        result.unwrap();
        assert!(out.contains("-------\n|8|1|6|\n-------\n|3|5|7|\n-------\n|4|9|2|\n"));
    }

    #[test]
    fn negative_size_is_an_error_after_earlier_output() {
        let (result, out) = output_for(&["3", "-1"]);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "cannot build a square of size -1");
        assert_eq!(
            err.root_cause().to_string(),
            "invalid square size -1: order must be positive"
        );
        assert_eq!(out, INVERTED_THREE);
    }

    #[test]
    fn even_size_is_an_error() {
        let (result, out) = output_for(&["4"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SquareError>(),
            Some(SquareError::InvalidSize { size: 4, .. })
        ));
        assert!(out.is_empty());
    }
}
