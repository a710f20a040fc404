//! Calculator input and output records

use super::InterestPaidFrequency;
use serde::{Deserialize, Serialize};

/// A validated term deposit request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDepositInput {
    /// Principal invested
    pub deposit_amount: f64,

    /// Nominal annual rate as a percentage (1.1 = 1.1%)
    pub interest_rate: f64,

    /// Term in whole years
    pub investment_term: u32,

    #[serde(alias = "interestPaidFrequency")]
    pub interest_paid: InterestPaidFrequency,
}

impl TermDepositInput {
    pub fn new(
        deposit_amount: f64,
        interest_rate: f64,
        investment_term: u32,
        interest_paid: InterestPaidFrequency,
    ) -> Self {
        Self {
            deposit_amount,
            interest_rate,
            investment_term,
            interest_paid,
        }
    }

    /// Same deposit with a different payment frequency
    pub fn with_frequency(&self, interest_paid: InterestPaidFrequency) -> Self {
        Self {
            interest_paid,
            ..*self
        }
    }
}

/// Balance and interest at maturity, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDepositResult {
    pub final_balance: i64,
    pub total_interest_earned: i64,
}
