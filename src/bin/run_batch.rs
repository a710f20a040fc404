//! Run the calculator over every deposit in a CSV file
//!
//! Writes one output row per input row, with either the result or the
//! validation errors for that row.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use term_deposit::batch::{load_forms, run_batch, write_outcomes};
use term_deposit::CalculatorSettings;

#[derive(Parser)]
#[command(name = "run-batch")]
#[command(about = "Calculate term deposits from a CSV file")]
struct Args {
    /// Input CSV (deposit_amount,interest_rate,investment_term,interest_paid)
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value = "term_deposit_output.csv")]
    output: PathBuf,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = CalculatorSettings::load_or_default(args.config.as_ref())
        .context("Failed to load settings")?;

    let start = Instant::now();
    println!("Loading deposits from {}...", args.input.display());

    let forms = load_forms(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    println!("Loaded {} deposits in {:?}", forms.len(), start.elapsed());

    let calc_start = Instant::now();
    let outcomes = run_batch(forms, &settings.rules);
    println!("Calculations complete in {:?}", calc_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_outcomes(BufWriter::new(file), &outcomes)?;
    println!("Output written to {}", args.output.display());

    let (ok, failed): (Vec<_>, Vec<_>) = outcomes.iter().partition(|o| o.result.is_ok());
    let total_deposits: f64 = ok.iter().filter_map(|o| o.form.deposit_amount).sum();
    let total_interest: i64 = ok
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .map(|r| r.total_interest_earned)
        .sum();

    println!("\nBatch Summary:");
    println!("  Calculated: {}", ok.len());
    println!("  Rejected:   {}", failed.len());
    println!("  Deposits:   ${:.0}", total_deposits);
    println!("  Interest:   ${}", total_interest);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
