//! Year-by-year accrual over the term

use super::calculator::balance_after_years;
use super::TermDepositInput;
use serde::Serialize;

/// One year of the term
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Year of the term (1-indexed)
    pub year: u32,
    pub opening_balance: f64,
    /// Interest earned during the year (accrued only, for at-maturity)
    pub interest: f64,
    pub closing_balance: f64,
}

/// Accrual schedule for a deposit, one row per year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSchedule {
    pub rows: Vec<ScheduleRow>,
}

impl BalanceSchedule {
    pub fn for_input(input: &TermDepositInput) -> Self {
        let mut rows = Vec::with_capacity(input.investment_term as usize);
        let mut opening = input.deposit_amount;

        for year in 1..=input.investment_term {
            let closing = balance_after_years(input, year);
            rows.push(ScheduleRow {
                year,
                opening_balance: opening,
                interest: closing - opening,
                closing_balance: closing,
            });
            opening = closing;
        }

        Self { rows }
    }

    /// Closing balance of the last year, unrounded
    pub fn final_balance(&self) -> Option<f64> {
        self.rows.last().map(|r| r.closing_balance)
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
