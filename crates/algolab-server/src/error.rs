//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use algolab_core::AlgoError;

/// Error returned by a handler; rendered as `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or invalid input.
    #[error("{0}")]
    BadRequest(String),

    /// Unknown catalog entry or execution.
    #[error("{0}")]
    NotFound(String),

    /// Request body over the configured limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Unexpected failure while computing.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AlgoError> for ApiError {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::InvalidInput(message) => Self::BadRequest(message),
            AlgoError::UnknownLanguage(_) => Self::BadRequest(err.to_string()),
            AlgoError::UnknownAlgorithm(_) => Self::NotFound(err.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
