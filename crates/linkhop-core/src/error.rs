use thiserror::Error;

/// Errors reported by repository backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("slug already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors surfaced by the create and list operations.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("no free slug found after {attempts} attempts")]
    GenerationFailed { attempts: u32 },
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::StorageUnavailable(value.to_string())
    }
}
