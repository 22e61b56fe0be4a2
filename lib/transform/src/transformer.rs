//! Fitted feature transformer.
//!
//! Applies a [`TransformSchema`] to an application record, producing the
//! query vector the index was populated with. The transformer is loaded
//! from a serialized artifact and never refitted at runtime.

use crate::schema::{FieldEncoder, TransformSchema};
use creditmem_core::{
    ApplicationRecord, Error, FeatureTransformer, FieldValue, QueryVector, Result,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A pre-fitted transformer over a fixed schema.
#[derive(Debug, Clone)]
pub struct FittedTransformer {
    schema: TransformSchema,
}

impl FittedTransformer {
    /// Wrap a validated schema.
    pub fn new(schema: TransformSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    /// Load the transformer artifact from a JSON file. Done once at
    /// startup, before any requests are dispatched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let schema: TransformSchema = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("{}: {e}", path.display())))?;
        let transformer = Self::new(schema)?;
        debug!(
            artifact = %path.display(),
            dim = transformer.vector_dim(),
            "loaded transformer artifact"
        );
        Ok(transformer)
    }

    pub fn schema(&self) -> &TransformSchema {
        &self.schema
    }

    /// The fixed output vector length.
    pub fn vector_dim(&self) -> usize {
        self.schema.vector_dim()
    }

    fn encode_field(
        &self,
        record: &ApplicationRecord,
        name: &str,
        encoder: &FieldEncoder,
        out: &mut Vec<f32>,
    ) -> Result<()> {
        let value = record.field(name).ok_or_else(|| {
            Error::FeatureExtraction(format!("record has no field '{name}'"))
        })?;

        match (encoder, value) {
            (FieldEncoder::Numeric { mean, std_dev }, FieldValue::Number(v)) => {
                out.push(((v - mean) / std_dev) as f32);
                Ok(())
            }
            (FieldEncoder::Categorical { categories }, FieldValue::Text(label)) => {
                let hit = categories.iter().position(|c| c == label).ok_or_else(|| {
                    Error::FeatureExtraction(format!(
                        "field '{name}' has out-of-domain value '{label}'"
                    ))
                })?;
                out.extend((0..categories.len()).map(|i| if i == hit { 1.0 } else { 0.0 }));
                Ok(())
            }
            (FieldEncoder::Numeric { .. }, FieldValue::Text(_)) => {
                Err(Error::FeatureExtraction(format!(
                    "field '{name}' is not numeric"
                )))
            }
            (FieldEncoder::Categorical { .. }, FieldValue::Number(_)) => {
                Err(Error::FeatureExtraction(format!(
                    "field '{name}' is not categorical"
                )))
            }
        }
    }
}

impl FeatureTransformer for FittedTransformer {
    /// Encode every schema field, in sorted name order, concatenating the
    /// per-field components. Any missing or out-of-domain value fails the
    /// whole transform; no defaults are substituted.
    fn transform(&self, record: &ApplicationRecord) -> Result<QueryVector> {
        let mut components = Vec::with_capacity(self.vector_dim());

        for name in self.schema.sorted_field_names() {
            let encoder = &self.schema.fields[name];
            self.encode_field(record, name, encoder, &mut components)?;
        }

        Ok(QueryVector::new(components))
    }
}
