//! Interest paid frequency

use crate::error::DepositError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest is paid out over the term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterestPaidFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
    /// Paid once as a lump sum at the end of the term, never reinvested
    AtMaturity,
}

impl InterestPaidFrequency {
    pub const ALL: [InterestPaidFrequency; 4] = [
        InterestPaidFrequency::Monthly,
        InterestPaidFrequency::Quarterly,
        InterestPaidFrequency::Annually,
        InterestPaidFrequency::AtMaturity,
    ];

    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Annually => 1,
            Self::AtMaturity => 1,
        }
    }

    /// Whether paid interest is reinvested during the term
    pub fn compounds(&self) -> bool {
        !matches!(self, Self::AtMaturity)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::AtMaturity => "at-maturity",
        }
    }
}

impl fmt::Display for InterestPaidFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestPaidFrequency {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "annually" => Ok(Self::Annually),
            "at-maturity" | "at maturity" | "maturity" => Ok(Self::AtMaturity),
            _ => Err(DepositError::InvalidFrequency(s.to_string())),
        }
    }
}
