use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

mod laws;

use laws::LawOutcome;

/// Checks the algebraic laws of `Maybe` against a corpus of sample values
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma separated sample values every law is checked against
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "-7,0,3,42"
    )]
    samples: Vec<i64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Where to write the json report
    #[arg(short, long, default_value = "law_check.json")]
    output: PathBuf,

    /// Show only failing laws
    #[arg(long)]
    failures_only: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.samples.is_empty() {
        anyhow::bail!("At least one sample value is required");
    }

    if args.format != "text" && args.format != "json" {
        anyhow::bail!("Unknown output format: {}", args.format);
    }

    println!("{}", "Maybe Law Check v0.1.0".bold().blue());
    println!("{}", "=====================================".blue());
    println!("  Samples: {:?}", args.samples);

    let outcomes = laws::check_laws(&args.samples);

    println!();
    for outcome in &outcomes {
        print_outcome(outcome, args.failures_only);
    }

    print_overall_summary(&outcomes);

    if args.format == "json" {
        let json_output = serde_json::to_string_pretty(&outcomes)?;
        fs::write(&args.output, json_output)
            .with_context(|| format!("Failed to write report to {}", args.output.display()))?;
        println!();
        println!("📝 Results exported to: {}", args.output.display());
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!("{} law(s) failed", failed);
    }

    Ok(())
}

fn print_outcome(outcome: &LawOutcome, failures_only: bool) {
    if outcome.passed() {
        if !failures_only {
            println!("  {} [{:?}] {}", "✅".green(), outcome.group, outcome.name);
        }
        return;
    }

    println!("  {} [{:?}] {}", "❌".red(), outcome.group, outcome.name.yellow());
    for failure in outcome.failures.iter().take(5) {
        println!("      sample {}: {}", failure.sample, failure.detail);
    }
}

fn print_overall_summary(outcomes: &[LawOutcome]) {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let checks: usize = outcomes.iter().map(|o| o.samples_checked).sum();

    println!();
    println!("{}", "=====================================".blue());
    println!("{}", "Overall Summary".bold().green());
    println!("{}", "=====================================".blue());
    println!("  Laws checked: {}", outcomes.len());
    println!("  Sample evaluations: {}", checks);
    println!("  Passing: {}", passed.to_string().green());

    let failed = outcomes.len() - passed;
    if failed > 0 {
        println!("  Failing: {}", failed.to_string().red());
    }
}
