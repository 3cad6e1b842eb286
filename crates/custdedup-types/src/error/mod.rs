//! Typed error definitions for customer records.
//!
//! Errors are serializable for API responses, displayable for logging and
//! matchable for status-code mapping.

mod customer;

pub use customer::CustomerError;

/// Standard Result type using CustomerError.
pub type Result<T> = std::result::Result<T, CustomerError>;
