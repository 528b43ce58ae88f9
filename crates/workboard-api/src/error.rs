//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AuthMismatch(String),

    #[error("No file uploaded.")]
    NoFile,

    #[error("Only JPEG, PNG, and GIF files are allowed.")]
    UnsupportedType,

    #[error("File too large.")]
    TooLarge,

    #[error("File upload error.")]
    Upload(String),

    #[error("Server error")]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::InvalidFormat(_)
            | ApiError::Duplicate(_)
            | ApiError::AuthMismatch(_)
            | ApiError::NoFile
            | ApiError::UnsupportedType
            | ApiError::TooLarge
            | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store failures echo the underlying error in the body, matching
        // the service this replaces. Known information disclosure; see
        // DESIGN.md before tightening.
        let error = match &self {
            ApiError::Store(e) => Some(e.to_string()),
            ApiError::Upload(e) => Some(e.clone()),
            _ => None,
        };

        let body = ErrorBody {
            message: self.to_string(),
            error,
        };

        (status, Json(body)).into_response()
    }
}
