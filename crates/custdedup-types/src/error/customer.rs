//! Customer record errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at the record boundary, before anything reaches a store.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CustomerError {
    /// A record field is missing or malformed
    #[error("Validation error for {field}: {message}")]
    Validation {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Source tag outside the recognized set
    #[error("Unknown source system '{value}' (expected one of: salesforce, hubspot, internal)")]
    InvalidSource {
        /// The rejected tag as received
        value: String,
    },
}

impl CustomerError {
    /// Check if this error comes from a malformed write payload.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Prefix the failing field with its position inside a batch.
    pub fn in_batch(self, index: usize) -> Self {
        match self {
            Self::Validation { field, message } => {
                Self::Validation { field: format!("customers[{index}].{field}"), message }
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation() {
        let validation =
            CustomerError::Validation { field: "name".to_string(), message: "empty".to_string() };
        let source = CustomerError::InvalidSource { value: "x".to_string() };

        assert!(validation.is_validation());
        assert!(!source.is_validation());
    }

    #[test]
    fn test_in_batch_prefixes_field() {
        let err = CustomerError::Validation {
            field: "email".to_string(),
            message: "invalid".to_string(),
        }
        .in_batch(3);

        assert_eq!(
            err,
            CustomerError::Validation {
                field: "customers[3].email".to_string(),
                message: "invalid".to_string()
            }
        );
    }
}
