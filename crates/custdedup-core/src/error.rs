//! Unified error types for custdedup core.

use serde::Serialize;
use thiserror::Error;

use custdedup_types::CustomerError;

use crate::modules::repository::RepositoryError;

/// Main error type for service operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Record failed boundary validation or carried an unknown source tag.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// Record store operation failed.
    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Seed file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON for a bulk upload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// The boundary error, if this failure was caused by the caller's input.
    pub const fn as_customer_error(&self) -> Option<&CustomerError> {
        match self {
            Self::Customer(err) => Some(err),
            _ => None,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for service operations.
pub type AppResult<T> = Result<T, AppError>;
