//! Term deposit calculation engine

mod calculator;
mod frequency;
mod input;
mod schedule;

pub use calculator::{
    balance_in_range, calculate, calculate_from_parts, final_balance_unrounded, rate_fraction,
    round_to_two_decimal_places, MAX_FINAL_BALANCE,
};
pub use frequency::InterestPaidFrequency;
pub use input::{TermDepositInput, TermDepositResult};
pub use schedule::{BalanceSchedule, ScheduleRow};
