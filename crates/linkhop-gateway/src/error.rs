use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkhop_core::ShortenerError;
use linkhop_redirector::RedirectorError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// The operation a request was performing, used to word 500 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Resolve,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch URLs",
            Operation::Create => "Failed to create URL",
            Operation::Resolve => "Failed to resolve URL",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("URL not found")]
    NotFound,
    /// Storage or generation failure. The cause is logged, never sent to clients.
    #[error("{}: {cause}", .operation.failure_message())]
    Internal { operation: Operation, cause: String },
}

impl AppError {
    pub fn shortener(operation: Operation, err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidInput(message) => AppError::BadRequest(message),
            other @ (ShortenerError::GenerationFailed { .. }
            | ShortenerError::StorageUnavailable(_)) => AppError::Internal {
                operation,
                cause: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RedirectorError> for AppError {
    fn from(err: RedirectorError) -> Self {
        match err {
            RedirectorError::NotFound => AppError::NotFound,
            RedirectorError::StorageUnavailable(cause) => AppError::Internal {
                operation: Operation::Resolve,
                cause,
            },
        }
    }
}

/// 5xx causes are logged here and nowhere below the gateway.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(message) => message,
            AppError::NotFound => "URL not found".to_string(),
            AppError::Internal { operation, cause } => {
                error!(?operation, %cause, "request failed");
                operation.failure_message().to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
