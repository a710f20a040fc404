//! Term deposit calculator
//!
//! Computes the final balance and total interest earned for a fixed-term
//! deposit, given the principal, nominal annual rate, term in whole years,
//! and how often interest is paid.

pub mod batch;
pub mod config;
pub mod deposit;
pub mod error;
pub mod validation;

pub use config::{CalculatorSettings, FormDefaults, ValidationRules};
pub use deposit::{
    calculate, calculate_from_parts, BalanceSchedule, InterestPaidFrequency, ScheduleRow,
    TermDepositInput, TermDepositResult,
};
pub use error::{DepositError, FieldError, ValidationErrors};
pub use validation::DepositForm;
