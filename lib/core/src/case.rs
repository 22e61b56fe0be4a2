use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Terminal states a historical loan can be labeled with.
///
/// Only these three labels participate in the outcome percentages; any
/// other label in stored payloads is treated as unlabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanOutcome {
    Repaid,
    Defaulted,
    InProgress,
}

impl LoanOutcome {
    /// Parse a stored outcome label. Unknown labels map to `None` rather
    /// than an error so a single odd payload cannot fail a whole query.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Repaid" => Some(LoanOutcome::Repaid),
            "Defaulted" => Some(LoanOutcome::Defaulted),
            "In Progress" => Some(LoanOutcome::InProgress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanOutcome::Repaid => "Repaid",
            LoanOutcome::Defaulted => "Defaulted",
            LoanOutcome::InProgress => "In Progress",
        }
    }
}

/// A historical case returned by the vector index: the similarity score
/// assigned by the index and the stored payload attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedCase {
    pub score: f32,
    pub payload: Value,
}

impl RetrievedCase {
    #[must_use]
    pub fn new(score: f32, payload: Value) -> Self {
        Self { score, payload }
    }

    /// The case's outcome label, if present and recognized.
    pub fn outcome(&self) -> Option<LoanOutcome> {
        self.payload
            .get("loan_outcome")
            .and_then(Value::as_str)
            .and_then(LoanOutcome::parse)
    }

    /// The case's fraud indicator. Absent defaults to 0. Non-0/1 numeric
    /// values are already-weighted counts and pass through untouched.
    pub fn fraud_weight(&self) -> f64 {
        self.payload
            .get("fraud_flag")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}
