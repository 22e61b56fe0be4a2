//! # creditmem Index
//!
//! Vector index client for creditmem.
//!
//! Implements [`VectorIndex`](creditmem_core::VectorIndex) against a
//! Qdrant-compatible REST service. The engine treats the index as a
//! remote collaborator: one search call per request, ranking decided by
//! the service, failures surfaced as
//! [`Error::RetrievalService`](creditmem_core::Error::RetrievalService)
//! so callers never mistake an outage for "no similar cases".

pub mod client;

pub use client::{IndexConfig, QdrantIndex, DEFAULT_TIMEOUT};
