//! Calculator settings: initial form values and validation limits
//!
//! Loaded from JSON. Every field is optional and falls back to the
//! built-in default, so `{}` is a valid settings file.

use crate::deposit::InterestPaidFrequency;
use crate::error::Result;
use crate::validation::DepositForm;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Values the form starts out with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefaults {
    #[serde(default = "default_deposit_amount")]
    pub deposit_amount: f64,

    /// Percentage (1.1 = 1.1%)
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    #[serde(default = "default_investment_term")]
    pub investment_term: u32,

    #[serde(default)]
    pub interest_paid: InterestPaidFrequency,
}

fn default_deposit_amount() -> f64 { 10_000.0 }
fn default_interest_rate() -> f64 { 1.1 }
fn default_investment_term() -> u32 { 3 }

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            deposit_amount: 10_000.0,
            interest_rate: 1.1,
            investment_term: 3,
            interest_paid: InterestPaidFrequency::Monthly,
        }
    }
}

impl FormDefaults {
    /// A form pre-filled with these values
    pub fn to_form(&self) -> DepositForm {
        DepositForm {
            deposit_amount: Some(self.deposit_amount),
            interest_rate: Some(self.interest_rate),
            investment_term: Some(self.investment_term as f64),
            interest_paid: Some(self.interest_paid.to_string()),
        }
    }
}

/// Limits enforced before a form reaches the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Longest accepted term in years
    #[serde(default = "default_max_investment_term")]
    pub max_investment_term: u32,
}

fn default_max_investment_term() -> u32 { 30 }

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_investment_term: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub defaults: FormDefaults,

    #[serde(default)]
    pub rules: ValidationRules,
}

impl CalculatorSettings {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let settings = serde_json::from_reader(reader)?;
        Ok(settings)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let settings = Self::from_reader(BufReader::new(file))?;
        info!("Loaded calculator settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from `path` when given, built-in defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}
