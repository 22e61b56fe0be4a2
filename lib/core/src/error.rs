use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Feature extraction failed: {0}")]
    FeatureExtraction(String),

    #[error("Retrieval service error: {0}")]
    RetrievalService(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True for failures a caller may reasonably retry (transient
    /// index/network conditions). Bad input and bad artifacts are not
    /// retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RetrievalService(_))
    }
}
