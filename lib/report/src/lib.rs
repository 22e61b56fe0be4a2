//! # creditmem Report
//!
//! Report renderer for creditmem. Consumes a finished
//! [`RetrievalSummary`](creditmem_core::RetrievalSummary) and lays out
//! the decision-support document; it computes nothing itself beyond
//! display rounding.

pub mod generator;

pub use generator::ReportGenerator;
