//! Transform schema definitions.
//!
//! A schema captures the parameters a transformer was fitted with: per
//! numeric field the standardization moments, per categorical field the
//! category vocabulary. The schema is serialized as the transformer
//! artifact and loaded once at process startup.

use creditmem_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fitted transformation schema for application records.
///
/// Field order in the output vector is the sorted field-name order, so
/// the layout is stable regardless of how the artifact's map serializes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformSchema {
    /// Schema version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Encoder configurations keyed by field name
    pub fields: HashMap<String, FieldEncoder>,
}

fn default_version() -> u32 {
    1
}

/// Fitted encoder for a single field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldEncoder {
    /// Standardization: `(value - mean) / std_dev`. One vector component.
    Numeric { mean: f64, std_dev: f64 },
    /// One-hot over the fitted vocabulary. `categories.len()` components.
    /// A value outside the vocabulary is out-of-domain, not a zero row.
    Categorical { categories: Vec<String> },
}

impl FieldEncoder {
    /// Number of vector components this encoder emits.
    pub fn width(&self) -> usize {
        match self {
            FieldEncoder::Numeric { .. } => 1,
            FieldEncoder::Categorical { categories } => categories.len(),
        }
    }
}

impl TransformSchema {
    pub fn new(fields: HashMap<String, FieldEncoder>) -> Self {
        Self { version: 1, fields }
    }

    /// Validate the fitted parameters.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::InvalidConfig(
                "transform schema has no fields".to_string(),
            ));
        }

        for (name, encoder) in &self.fields {
            match encoder {
                FieldEncoder::Numeric { mean, std_dev } => {
                    if !mean.is_finite() || !std_dev.is_finite() {
                        return Err(Error::InvalidConfig(format!(
                            "field '{name}' has non-finite moments"
                        )));
                    }
                    if *std_dev <= 0.0 {
                        return Err(Error::InvalidConfig(format!(
                            "field '{name}' has non-positive std_dev"
                        )));
                    }
                }
                FieldEncoder::Categorical { categories } => {
                    if categories.is_empty() {
                        return Err(Error::InvalidConfig(format!(
                            "field '{name}' has an empty category list"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Field names in a deterministic order (sorted)
    pub fn sorted_field_names(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.fields.keys().collect();
        names.sort();
        names
    }

    /// Total output vector dimension.
    pub fn vector_dim(&self) -> usize {
        self.fields.values().map(FieldEncoder::width).sum()
    }
}
