//! Compare all four interest paid frequencies for one deposit
//! Default case: $10,000 at 1.1% for 3 years

use clap::Parser;
use std::process::ExitCode;
use term_deposit::deposit::final_balance_unrounded;
use term_deposit::{calculate, DepositForm, InterestPaidFrequency, ValidationRules};

#[derive(Parser)]
#[command(name = "compare-frequencies")]
#[command(about = "Final balance under each interest paid frequency")]
struct Args {
    #[arg(short, long, default_value_t = 10_000.0)]
    deposit_amount: f64,

    /// Percent per annum
    #[arg(short, long, default_value_t = 1.1)]
    interest_rate: f64,

    /// Years
    #[arg(short = 't', long, default_value_t = 3)]
    investment_term: u32,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    // Monthly compounding gives the largest balance, so it bounds the others
    let form = DepositForm {
        deposit_amount: Some(args.deposit_amount),
        interest_rate: Some(args.interest_rate),
        investment_term: Some(args.investment_term as f64),
        interest_paid: Some(InterestPaidFrequency::Monthly.to_string()),
    };
    let base = match form.validate(&ValidationRules::default()) {
        Ok(input) => input,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", error);
            }
            return ExitCode::FAILURE;
        }
    };

    println!(
        "${:.2} at {}% for {} years",
        args.deposit_amount, args.interest_rate, args.investment_term
    );
    println!("{:<12} {:<8} {:<16} {:<14} {:<10}",
             "Paid", "Periods", "Unrounded", "FinalBalance", "Interest");

    for freq in InterestPaidFrequency::ALL {
        let input = base.with_frequency(freq);
        let result = calculate(&input);

        let periods = if freq.compounds() {
            freq.periods_per_year().to_string()
        } else {
            "-".to_string()
        };

        println!("{:<12} {:<8} {:<16.4} {:<14} {:<10}",
                 freq.as_str(),
                 periods,
                 final_balance_unrounded(&input),
                 result.final_balance,
                 result.total_interest_earned);
    }

    ExitCode::SUCCESS
}
