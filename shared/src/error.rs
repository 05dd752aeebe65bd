use thiserror::Error;

/// Failures of the persistence binding. Store mutations themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Host storage rejected the operation (quota exceeded, storage unavailable)
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
