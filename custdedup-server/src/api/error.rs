//! Error responses shared by the API handlers.

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use custdedup_core::AppError;
use custdedup_types::CustomerError;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(detail)))
}

/// Map a service failure to a response. Caller mistakes keep the `context`
/// prefix; storage failures are logged and reported as 500.
pub fn from_app_error(context: &str, err: AppError) -> ApiError {
    match err.as_customer_error() {
        Some(CustomerError::Validation { .. }) => {
            api_error(StatusCode::BAD_REQUEST, format!("{context}: {err}"))
        },
        Some(CustomerError::InvalidSource { .. }) => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        },
        None => {
            error!("{}: {}", context, err);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {err}"))
        },
    }
}

/// Map a failed create or bulk upload. Every failure is a 400 carrying the
/// `context` prefix; storage failures are still logged.
pub fn from_write_error(context: &str, err: AppError) -> ApiError {
    if err.as_customer_error().is_none() {
        error!("{}: {}", context, err);
    }
    api_error(StatusCode::BAD_REQUEST, format!("{context}: {err}"))
}
