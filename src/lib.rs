//! # creditmem
//!
//! Credit decision memory: similarity retrieval and outcome aggregation
//! over historical loan cases.
//!
//! Given a new loan application, creditmem vectorizes it with a
//! pre-fitted feature transformer, queries a nearest-neighbor index of
//! historical cases, and aggregates the retrieved outcomes into a
//! statistically meaningful summary for human credit review. It performs
//! no scoring and no automated approve/reject decision.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use creditmem::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> anyhow::Result<()> {
//! // Load collaborators once at startup
//! let transformer = FittedTransformer::load("vector_preprocessor.json")?;
//! let index = QdrantIndex::new(
//!     IndexConfig::new("https://qdrant.example:6333")
//!         .with_api_key("secret")
//!         .with_timeout(Duration::from_secs(60)),
//! )?;
//!
//! let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");
//!
//! // One request
//! let record = ApplicationRecord {
//!     monthly_income: 5200.0,
//!     loan_amount_requested: 15000.0,
//!     loan_tenure_months: 36,
//!     cibil_score: 710,
//!     purpose_of_loan: "Home Renovation".to_string(),
//! };
//! let summary = engine.find_similar(&record, DEFAULT_TOP_K).await?;
//!
//! ReportGenerator::new().generate("decision_report.md", &record, &summary, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `creditmem-core` - domain types, error taxonomy, the retrieval engine
//! - `creditmem-transform` - the pre-fitted feature transformer
//! - `creditmem-index` - Qdrant-compatible REST index client
//! - `creditmem-report` - decision-support document renderer

// Re-export core types
pub use creditmem_core::{
    ApplicationRecord, Error, FeatureTransformer, FieldValue, LoanOutcome, QueryVector, Result,
    RetrievalSummary, RetrievedCase, SimilarityEngine, VectorIndex, DEFAULT_TOP_K,
};

// Re-export the transformer
pub use creditmem_transform::{FieldEncoder, FittedTransformer, TransformSchema};

// Re-export the index client
pub use creditmem_index::{IndexConfig, QdrantIndex};

// Re-export the renderer
pub use creditmem_report::ReportGenerator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApplicationRecord, Error, FeatureTransformer, FieldEncoder, FittedTransformer,
        IndexConfig, LoanOutcome, QdrantIndex, QueryVector, ReportGenerator, Result,
        RetrievalSummary, RetrievedCase, SimilarityEngine, TransformSchema, VectorIndex,
        DEFAULT_TOP_K,
    };
}
