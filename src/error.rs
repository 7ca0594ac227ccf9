use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// ApiError
///
/// Error taxonomy of the JSON API. Only the static message reaches the caller;
/// the cause of an internal error is logged and dropped.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was understood but a field failed validation (400).
    #[error("{0}")]
    InvalidInput(&'static str),
    /// Anything else (500).
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        cause: BoxError,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, cause: impl Into<BoxError>) -> Self {
        Self::Internal {
            message,
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidInput(message) => tracing::warn!(%message, "rejected request"),
            Self::Internal { message, cause } => tracing::error!(error = %cause, "{message}"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
