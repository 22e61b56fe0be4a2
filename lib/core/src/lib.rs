//! # creditmem Core
//!
//! Core library for the creditmem decision-support system.
//!
//! This crate provides the similarity retrieval engine and its domain
//! types:
//!
//! - [`ApplicationRecord`] - a loan application under review
//! - [`QueryVector`] - the application's position in feature space
//! - [`RetrievedCase`] - a scored historical case from the index
//! - [`RetrievalSummary`] - aggregated outcomes of similar cases
//! - [`SimilarityEngine`] - transform, query, aggregate
//!
//! The collaborators at the system boundary are traits: a pre-fitted
//! [`FeatureTransformer`] and a remote [`VectorIndex`]. Both are injected
//! at construction so tests can substitute fakes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use creditmem_core::{ApplicationRecord, SimilarityEngine, DEFAULT_TOP_K};
//! # use creditmem_core::{FeatureTransformer, VectorIndex, Result};
//! # async fn run<T: FeatureTransformer, I: VectorIndex>(transformer: T, index: I) -> Result<()> {
//! let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");
//!
//! let record = ApplicationRecord {
//!     monthly_income: 5200.0,
//!     loan_amount_requested: 15000.0,
//!     loan_tenure_months: 36,
//!     cibil_score: 710,
//!     purpose_of_loan: "Home Renovation".to_string(),
//! };
//!
//! let summary = engine.find_similar(&record, DEFAULT_TOP_K).await?;
//! println!("{} similar cases, {:.1}% repaid", summary.total_cases, summary.repaid_pct);
//! # Ok(())
//! # }
//! ```

pub mod case;
pub mod engine;
pub mod error;
pub mod record;
pub mod summary;
pub mod vector;

pub use case::{LoanOutcome, RetrievedCase};
pub use engine::{FeatureTransformer, SimilarityEngine, VectorIndex, DEFAULT_TOP_K};
pub use error::{Error, Result};
pub use record::{ApplicationRecord, FieldValue, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};
pub use summary::RetrievalSummary;
pub use vector::QueryVector;
