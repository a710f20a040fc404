//! Calculate a single term deposit from the command line
//!
//! Any field left off falls back to the configured form defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use term_deposit::{calculate, BalanceSchedule, CalculatorSettings, DepositForm};

#[derive(Parser)]
#[command(name = "term-deposit")]
#[command(about = "Final balance and interest earned for a term deposit")]
struct Args {
    /// Amount deposited
    #[arg(short, long)]
    deposit_amount: Option<f64>,

    /// Nominal annual interest rate in percent (1.1 = 1.1%)
    #[arg(short, long)]
    interest_rate: Option<f64>,

    /// Investment term in whole years
    #[arg(short = 't', long)]
    investment_term: Option<f64>,

    /// monthly, quarterly, annually or at-maturity
    #[arg(short = 'p', long)]
    interest_paid: Option<String>,

    /// JSON settings file (form defaults and validation limits)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the year-by-year balance schedule
    #[arg(long)]
    schedule: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = CalculatorSettings::load_or_default(args.config.as_ref())
        .context("Failed to load settings")?;

    let defaults = settings.defaults.to_form();
    let form = DepositForm {
        deposit_amount: args.deposit_amount.or(defaults.deposit_amount),
        interest_rate: args.interest_rate.or(defaults.interest_rate),
        investment_term: args.investment_term.or(defaults.investment_term),
        interest_paid: args.interest_paid.or(defaults.interest_paid),
    };

    let input = match form.validate(&settings.rules) {
        Ok(input) => input,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", error);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = calculate(&input);
    let schedule = args.schedule.then(|| BalanceSchedule::for_input(&input));

    if args.json {
        let mut body = json!({ "input": input, "result": result });
        if let Some(schedule) = &schedule {
            body["schedule"] = serde_json::to_value(&schedule.rows)?;
        }
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Deposit amount:        ${:.2}", input.deposit_amount);
    println!("Interest rate:         {}% p.a.", input.interest_rate);
    println!("Investment term:       {} years", input.investment_term);
    println!("Interest paid:         {}", input.interest_paid);
    println!();
    println!("Final balance:         ${}", result.final_balance);
    println!("Total interest earned: ${}", result.total_interest_earned);

    if let Some(schedule) = &schedule {
        println!();
        println!("{:<6} {:>14} {:>12} {:>14}", "Year", "Opening", "Interest", "Closing");
        for row in &schedule.rows {
            println!(
                "{:<6} {:>14.2} {:>12.2} {:>14.2}",
                row.year, row.opening_balance, row.interest, row.closing_balance
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
