//! Batch calculation over CSV files
//!
//! Input columns: `deposit_amount,interest_rate,investment_term,interest_paid`.
//! Blank or non-numeric cells count as missing. Rows are validated and calculated
//! independently, so one bad row never stops the rest of the batch.

use crate::config::ValidationRules;
use crate::deposit::{calculate, TermDepositResult};
use crate::error::{Result, ValidationErrors};
use crate::validation::DepositForm;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One CSV input record; unparseable numbers read as missing
#[derive(Debug, Clone, Deserialize)]
struct InputRecord {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    deposit_amount: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    investment_term: Option<f64>,
    interest_paid: Option<String>,
}

impl From<InputRecord> for DepositForm {
    fn from(record: InputRecord) -> Self {
        Self {
            deposit_amount: record.deposit_amount,
            interest_rate: record.interest_rate,
            investment_term: record.investment_term,
            interest_paid: record.interest_paid,
        }
    }
}

/// Outcome for one input row
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub form: DepositForm,
    pub result: std::result::Result<TermDepositResult, ValidationErrors>,
}

/// One CSV output record
#[derive(Debug, Serialize)]
struct OutputRecord<'a> {
    row: usize,
    deposit_amount: Option<f64>,
    interest_rate: Option<f64>,
    investment_term: Option<f64>,
    interest_paid: Option<&'a str>,
    final_balance: Option<i64>,
    total_interest_earned: Option<i64>,
    error: Option<String>,
}

pub fn load_forms_from_reader<R: Read>(reader: R) -> Result<Vec<DepositForm>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut forms = Vec::new();
    for record in rdr.deserialize() {
        let record: InputRecord = record?;
        forms.push(record.into());
    }
    Ok(forms)
}

pub fn load_forms<P: AsRef<Path>>(path: P) -> Result<Vec<DepositForm>> {
    let path = path.as_ref();
    let forms = load_forms_from_reader(File::open(path)?)?;
    info!("Loaded {} deposits from {}", forms.len(), path.display());
    Ok(forms)
}

/// Validate and calculate every form in parallel, keeping input order
pub fn run_batch(forms: Vec<DepositForm>, rules: &ValidationRules) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = forms
        .into_par_iter()
        .enumerate()
        .map(|(idx, form)| {
            let result = form.validate(rules).map(|input| calculate(&input));
            BatchOutcome {
                row: idx + 1,
                form,
                result,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        warn!("{} of {} rows failed validation", failed, outcomes.len());
    }
    outcomes
}

pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let (result, error) = match &outcome.result {
            Ok(result) => (Some(*result), None),
            Err(errors) => (None, Some(errors.to_string())),
        };
        wtr.serialize(OutputRecord {
            row: outcome.row,
            deposit_amount: outcome.form.deposit_amount,
            interest_rate: outcome.form.interest_rate,
            investment_term: outcome.form.investment_term,
            interest_paid: outcome.form.interest_paid.as_deref(),
            final_balance: result.map(|r| r.final_balance),
            total_interest_earned: result.map(|r| r.total_interest_earned),
            error,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
