use linkhop_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("URL not found")]
    NotFound,
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<StorageError> for RedirectorError {
    fn from(value: StorageError) -> Self {
        Self::StorageUnavailable(value.to_string())
    }
}
