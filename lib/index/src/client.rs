//! Qdrant-compatible REST client.
//!
//! Speaks the `POST /collections/{name}/points/search` protocol: a query
//! vector and a result limit in, ranked `(score, payload)` pairs out. The
//! service defines the similarity metric and the ordering; this client
//! never re-scores or re-sorts.

use async_trait::async_trait;
use creditmem_core::{Error, QueryVector, Result, RetrievedCase, VectorIndex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default request timeout, matching the service contract.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the vector index service.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Base URL of the index service, e.g. `https://host:6333`.
    pub url: String,
    /// API key sent in the `api-key` header when present.
    pub api_key: Option<String>,
    /// Upper bound on one search round-trip, connect time included.
    pub timeout: Duration,
}

impl IndexConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    vector: &'a QueryVector,
    limit: usize,
    with_payload: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<ScoredPoint>,
}

#[derive(Deserialize)]
struct ScoredPoint {
    #[allow(dead_code)]
    id: Value,
    score: f32,
    payload: Option<Value>,
}

/// A shared, pooled handle to the remote index. Cloning is cheap and the
/// handle is safe to use from concurrent requests.
#[derive(Debug, Clone)]
pub struct QdrantIndex {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl QdrantIndex {
    /// Build the client once at startup. The timeout is baked into the
    /// underlying connection pool so every search call inherits it.
    pub fn new(config: IndexConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn search_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/points/search", self.base_url, collection)
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn search(
        &self,
        collection: &str,
        vector: &QueryVector,
        limit: usize,
    ) -> Result<Vec<RetrievedCase>> {
        let url = self.search_url(collection);
        let body = SearchRequest {
            vector,
            limit,
            with_payload: true,
        };

        let mut request = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::RetrievalService(format!("search timed out: {url}"))
            } else {
                Error::RetrievalService(format!("search request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::RetrievalService(format!(
                "index returned {status}: {detail}"
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::RetrievalService(format!("malformed search response: {e}")))?;

        debug!(collection, results = parsed.result.len(), "index search complete");

        Ok(parsed
            .result
            .into_iter()
            .map(|point| RetrievedCase::new(point.score, point.payload.unwrap_or(Value::Null)))
            .collect())
    }
}
