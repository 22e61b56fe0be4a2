//! SimilarityEngine: orchestrates transform, index query, and aggregation.
//!
//! One `find_similar` call is one outbound index query. The engine holds
//! no mutable state, so a single instance serves concurrent requests.

use crate::record::ApplicationRecord;
use crate::summary::RetrievalSummary;
use crate::vector::QueryVector;
use crate::{Error, RetrievedCase, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// Default neighbor count when the caller has no preference.
pub const DEFAULT_TOP_K: usize = 10;

/// A pre-fitted, deterministic mapping from an application record to a
/// fixed-length query vector. Implementations must be side-effect-free:
/// two structurally identical records always yield the same vector.
pub trait FeatureTransformer: Send + Sync {
    fn transform(&self, record: &ApplicationRecord) -> Result<QueryVector>;
}

/// A remote nearest-neighbor index over stored historical cases.
///
/// Results come back ordered by descending similarity under the index's
/// own metric; the engine trusts that ranking and never re-sorts. `limit`
/// bounds the result count, but the service may return fewer. Transport
/// failures must surface as [`Error::RetrievalService`], never as an
/// empty result list.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn search(
        &self,
        collection: &str,
        vector: &QueryVector,
        limit: usize,
    ) -> Result<Vec<RetrievedCase>>;
}

/// The similarity retrieval engine.
///
/// Constructed once at startup with an already-initialized transformer
/// and index handle; each call is an independent, idempotent read.
pub struct SimilarityEngine<T, I> {
    transformer: T,
    index: I,
    collection: String,
}

impl<T, I> SimilarityEngine<T, I>
where
    T: FeatureTransformer,
    I: VectorIndex,
{
    pub fn new(transformer: T, index: I, collection: impl Into<String>) -> Self {
        Self {
            transformer,
            index,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Retrieve up to `k` similar historical cases and aggregate their
    /// outcomes.
    ///
    /// Zero matching cases is a success and yields the empty summary.
    /// Errors: [`Error::InvalidRequest`] for bad caller input,
    /// [`Error::FeatureExtraction`] when the transformer rejects the
    /// record, [`Error::RetrievalService`] when the index cannot be
    /// queried. No retry is performed at this layer.
    pub async fn find_similar(
        &self,
        record: &ApplicationRecord,
        k: usize,
    ) -> Result<RetrievalSummary> {
        if k == 0 {
            return Err(Error::InvalidRequest(
                "k must be a positive integer".to_string(),
            ));
        }
        record.validate()?;

        let vector = self.transformer.transform(record)?;
        debug!(
            collection = %self.collection,
            dim = vector.dim(),
            k,
            "querying vector index"
        );

        let cases = self
            .index
            .search(&self.collection, &vector, k)
            .await?;

        if cases.is_empty() {
            info!(collection = %self.collection, "no similar cases found");
            return Ok(RetrievalSummary::empty());
        }

        let summary = RetrievalSummary::aggregate(cases);
        info!(
            collection = %self.collection,
            total_cases = summary.total_cases,
            avg_similarity = summary.avg_similarity,
            "similarity retrieval complete"
        );

        Ok(summary)
    }
}
