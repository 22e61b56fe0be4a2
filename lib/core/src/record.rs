use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Credit score bounds for the bureau scale used by the historical data.
pub const MIN_CREDIT_SCORE: i32 = 300;
pub const MAX_CREDIT_SCORE: i32 = 900;

/// A loan application as submitted for review.
///
/// Field names match the payload schema of the historical case store, so a
/// record round-trips cleanly through JSON on both sides of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationRecord {
    pub monthly_income: f64,
    pub loan_amount_requested: f64,
    pub loan_tenure_months: u32,
    pub cibil_score: i32,
    pub purpose_of_loan: String,
}

/// A single field value exposed to the feature transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl ApplicationRecord {
    /// Check caller-supplied ranges before the record is vectorized.
    pub fn validate(&self) -> Result<()> {
        if self.monthly_income < 0.0 || !self.monthly_income.is_finite() {
            return Err(Error::InvalidRequest(format!(
                "monthly_income must be non-negative, got {}",
                self.monthly_income
            )));
        }
        if self.loan_amount_requested <= 0.0 || !self.loan_amount_requested.is_finite() {
            return Err(Error::InvalidRequest(format!(
                "loan_amount_requested must be positive, got {}",
                self.loan_amount_requested
            )));
        }
        if self.loan_tenure_months == 0 {
            return Err(Error::InvalidRequest(
                "loan_tenure_months must be positive".to_string(),
            ));
        }
        if self.cibil_score < MIN_CREDIT_SCORE || self.cibil_score > MAX_CREDIT_SCORE {
            return Err(Error::InvalidRequest(format!(
                "cibil_score must be in {}..={}, got {}",
                MIN_CREDIT_SCORE, MAX_CREDIT_SCORE, self.cibil_score
            )));
        }
        if self.purpose_of_loan.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "purpose_of_loan must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Look up a field by the name a transformer schema uses.
    ///
    /// The transformer binds to fields by name so its fitted schema may
    /// list them in any order; `None` means the record cannot supply a
    /// field the artifact was fitted on.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "monthly_income" => Some(FieldValue::Number(self.monthly_income)),
            "loan_amount_requested" => Some(FieldValue::Number(self.loan_amount_requested)),
            "loan_tenure_months" => Some(FieldValue::Number(f64::from(self.loan_tenure_months))),
            "cibil_score" => Some(FieldValue::Number(f64::from(self.cibil_score))),
            "purpose_of_loan" => Some(FieldValue::Text(&self.purpose_of_loan)),
            _ => None,
        }
    }
}
