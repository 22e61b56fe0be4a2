//! # creditmem Transform
//!
//! The pre-fitted feature transformer for creditmem.
//!
//! Converts an [`ApplicationRecord`](creditmem_core::ApplicationRecord)
//! into the fixed-length query vector the historical index was populated
//! with. The transformation parameters (standardization moments for
//! numeric fields, the category vocabulary for categorical fields) come
//! from a JSON artifact produced at fitting time and loaded once at
//! process startup; no fitting happens in this crate.
//!
//! Missing fields and out-of-domain categories are hard failures. A
//! silently defaulted component would place the application in the wrong
//! region of feature space and make the retrieved neighbors meaningless.

pub mod schema;
pub mod transformer;

pub use schema::{FieldEncoder, TransformSchema};
pub use transformer::FittedTransformer;
