use super::{ConfigError, StorageError, ValidationError};

/// Top-level error for every fallible Larder operation.
#[derive(Debug, thiserror::Error)]
pub enum LarderError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("receipt could not be parsed: {reason}")]
    ParseFailure { reason: String },

    #[error("product normalization failed for '{raw_name}': {reason}")]
    NormalizationFailed { raw_name: String, reason: String },
}

impl LarderError {
    /// Storage failures are recoverable everywhere except the first append of a session.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

/// Convenience alias used across all Larder crates.
pub type LarderResult<T> = Result<T, LarderError>;
