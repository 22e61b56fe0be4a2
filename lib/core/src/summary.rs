//! Outcome aggregation over retrieved historical cases.
//!
//! A [`RetrievalSummary`] is built exactly once per query and never
//! mutated afterwards; the renderer and any other downstream consumer see
//! the same finished numbers.

use crate::case::{LoanOutcome, RetrievedCase};
use serde::Serialize;

/// Aggregated statistics for one similarity query, plus the raw ordered
/// case list for consumers that need per-case detail.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RetrievalSummary {
    /// Count of all returned cases, labeled or not.
    pub total_cases: usize,
    pub repaid_pct: f64,
    pub defaulted_pct: f64,
    pub in_progress_pct: f64,
    /// Sum of fraud indicators. Fractional when payloads carry weighted
    /// flags; integral for ordinary 0/1 data.
    pub fraud_cases: f64,
    pub avg_similarity: f64,
    pub cases: Vec<RetrievedCase>,
}

impl RetrievalSummary {
    /// The defined empty-result contract: all statistics exactly zero and
    /// no cases. Zero matches is a valid terminal outcome, not an error.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_cases: 0,
            repaid_pct: 0.0,
            defaulted_pct: 0.0,
            in_progress_pct: 0.0,
            fraud_cases: 0.0,
            avg_similarity: 0.0,
            cases: Vec::new(),
        }
    }

    /// Aggregate an ordered list of retrieved cases.
    ///
    /// Percentages are computed against the full case count. A case whose
    /// outcome label is missing or unrecognized still counts in
    /// `total_cases` but contributes to no percentage bucket, so the three
    /// buckets may sum below 100 for such data.
    #[must_use]
    pub fn aggregate(cases: Vec<RetrievedCase>) -> Self {
        if cases.is_empty() {
            return Self::empty();
        }

        let total = cases.len();
        let mut repaid = 0usize;
        let mut defaulted = 0usize;
        let mut in_progress = 0usize;
        let mut fraud = 0.0f64;
        let mut score_sum = 0.0f64;

        for case in &cases {
            match case.outcome() {
                Some(LoanOutcome::Repaid) => repaid += 1,
                Some(LoanOutcome::Defaulted) => defaulted += 1,
                Some(LoanOutcome::InProgress) => in_progress += 1,
                None => {}
            }
            fraud += case.fraud_weight();
            score_sum += f64::from(case.score);
        }

        let pct = |count: usize| (count as f64 / total as f64) * 100.0;

        Self {
            total_cases: total,
            repaid_pct: pct(repaid),
            defaulted_pct: pct(defaulted),
            in_progress_pct: pct(in_progress),
            fraud_cases: fraud,
            avg_similarity: score_sum / total as f64,
            cases,
        }
    }
}
