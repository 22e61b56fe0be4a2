use serde::{Deserialize, Serialize};

/// A fixed-length query vector produced by the feature transformer.
///
/// Serializes as a bare JSON array so it can be placed directly into an
/// index search request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct QueryVector {
    data: Vec<f32>,
}

impl QueryVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl From<Vec<f32>> for QueryVector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}
