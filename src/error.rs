//! Error types for the calculator and its input surfaces

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised by the calculator, validation, and file handling
#[derive(Error, Debug)]
pub enum DepositError {
    /// Interest paid frequency outside monthly/quarterly/annually/at-maturity
    #[error(
        "invalid interest paid frequency {0:?}: \
         expected monthly, quarterly, annually or at-maturity"
    )]
    InvalidFrequency(String),

    /// Final balance too large to express exactly in whole currency units
    #[error("final balance {0:.0} is out of range")]
    BalanceOutOfRange(f64),

    /// One or more form fields failed validation
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DepositError>;

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name as shown to the user (camelCase)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation failures for one form, in field order
#[derive(Error, Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for a given field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            FieldError::new("depositAmount", "Please enter your deposit amount."),
            FieldError::new("investmentTerm", "The investment term must be at least 1 year."),
        ]);

        assert_eq!(
            errors.to_string(),
            "depositAmount: Please enter your deposit amount.; \
             investmentTerm: The investment term must be at least 1 year."
        );
        assert_eq!(
            errors.message_for("investmentTerm"),
            Some("The investment term must be at least 1 year.")
        );
        assert_eq!(errors.message_for("interestRate"), None);
    }

    #[test]
    fn test_invalid_frequency_message() {
        let err = DepositError::InvalidFrequency("weekly".to_string());
        assert!(err.to_string().contains("\"weekly\""));
    }
}
