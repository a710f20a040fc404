//! Form validation
//!
//! Turns raw form values into a `TermDepositInput`, collecting a
//! user-facing message for every field that fails.

use crate::config::ValidationRules;
use crate::deposit::{balance_in_range, InterestPaidFrequency, TermDepositInput};
use crate::error::{FieldError, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const DEPOSIT_AMOUNT: &str = "depositAmount";
pub const INTEREST_RATE: &str = "interestRate";
pub const INVESTMENT_TERM: &str = "investmentTerm";
pub const INTEREST_PAID: &str = "interestPaid";

/// Unvalidated form values; any of them may be missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositForm {
    #[serde(default)]
    pub deposit_amount: Option<f64>,

    #[serde(default)]
    pub interest_rate: Option<f64>,

    #[serde(default)]
    pub investment_term: Option<f64>,

    #[serde(default, alias = "interestPaidFrequency")]
    pub interest_paid: Option<String>,
}

impl DepositForm {
    pub fn validate(&self, rules: &ValidationRules) -> Result<TermDepositInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let deposit_amount = check_positive(
            DEPOSIT_AMOUNT,
            self.deposit_amount,
            "Please enter your deposit amount.",
            "The deposit amount must be at least $1.",
            &mut errors,
        );
        let interest_rate = check_positive(
            INTEREST_RATE,
            self.interest_rate,
            "Please enter your interest rate.",
            "The interest rate must be at least 0.01%.",
            &mut errors,
        );
        let investment_term = check_positive(
            INVESTMENT_TERM,
            self.investment_term,
            "Please enter your investment term.",
            "The investment term must be at least 1 year.",
            &mut errors,
        )
        .and_then(|term| check_term(term, rules, &mut errors));
        let interest_paid = check_interest_paid(self.interest_paid.as_deref(), &mut errors);

        let input = match (deposit_amount, interest_rate, investment_term, interest_paid) {
            (Some(deposit), Some(rate), Some(term), Some(paid)) if errors.is_empty() => {
                TermDepositInput::new(deposit, rate, term, paid)
            }
            _ => return Err(errors),
        };

        if !balance_in_range(&input) {
            errors.push(FieldError::new(
                DEPOSIT_AMOUNT,
                "The final balance would be too large to calculate. \
                 Reduce the deposit amount, interest rate, or investment term.",
            ));
            return Err(errors);
        }

        Ok(input)
    }
}

fn check_positive(
    field: &'static str,
    value: Option<f64>,
    required: &str,
    too_small: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match value {
        Some(v) if !v.is_finite() => {
            errors.push(FieldError::new(field, required));
            None
        }
        Some(v) if v <= 0.0 => {
            errors.push(FieldError::new(field, too_small));
            None
        }
        Some(v) => Some(v),
        None => {
            errors.push(FieldError::new(field, required));
            None
        }
    }
}

fn check_term(term: f64, rules: &ValidationRules, errors: &mut ValidationErrors) -> Option<u32> {
    if term.fract() != 0.0 {
        errors.push(FieldError::new(
            INVESTMENT_TERM,
            "The investment term must be a whole number of years.",
        ));
        return None;
    }
    if term > rules.max_investment_term as f64 {
        errors.push(FieldError::new(
            INVESTMENT_TERM,
            format!(
                "The investment term must be at most {} years.",
                rules.max_investment_term
            ),
        ));
        return None;
    }
    Some(term as u32)
}

fn check_interest_paid(
    value: Option<&str>,
    errors: &mut ValidationErrors,
) -> Option<InterestPaidFrequency> {
    match value.map(str::trim) {
        None | Some("") => {
            errors.push(FieldError::new(
                INTEREST_PAID,
                "Please declare your interest paid monthly, quarterly, annually, or at maturity.",
            ));
            None
        }
        Some(text) => match text.parse() {
            Ok(freq) => Some(freq),
            Err(_) => {
                errors.push(FieldError::new(
                    INTEREST_PAID,
                    "Interest paid must be one of monthly, quarterly, annually, or at-maturity.",
                ));
                None
            }
        },
    }
}
