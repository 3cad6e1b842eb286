//! Customer record model and the validated write payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::SourceSystem;
use crate::error::CustomerError;

/// A stored customer record.
///
/// `customer_id` is the identity key used for deduplication. It is a plain
/// domain value: several records may share it, within one source or across
/// sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerRecord {
    /// Storage identifier assigned by the record store
    pub id: i64,
    /// Customer identifier from the source system
    pub customer_id: i64,
    /// Customer name
    pub name: String,
    /// Customer email address
    pub email: String,
    /// Source system the record came from
    pub source: SourceSystem,
    /// Timestamp when the record was stored
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update, if any
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Inbound payload for creating a customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CustomerCreate {
    /// Customer ID from source system
    pub customer_id: i64,
    /// Customer name
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
    /// Customer email address
    #[validate(email(message = "not a valid email address"))]
    pub email: String,
    /// Source system
    pub source: SourceSystem,
}

impl CustomerCreate {
    pub fn new(
        customer_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        source: SourceSystem,
    ) -> Self {
        Self { customer_id, name: name.into(), email: email.into(), source }
    }
}

/// Bulk upload payload: `{ "customers": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerBulkUpload {
    pub customers: Vec<CustomerCreate>,
}

impl CustomerBulkUpload {
    /// Validate every entry; the first failure rejects the whole batch.
    pub fn validate_all(self) -> crate::Result<Vec<NewCustomer>> {
        self.customers
            .into_iter()
            .enumerate()
            .map(|(index, customer)| {
                NewCustomer::try_from(customer).map_err(|err| err.in_batch(index))
            })
            .collect()
    }
}

/// A customer record that passed schema validation and may be stored.
///
/// Only obtainable through `TryFrom<CustomerCreate>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    customer_id: i64,
    name: String,
    email: String,
    source: SourceSystem,
}

impl NewCustomer {
    pub const fn customer_id(&self) -> i64 {
        self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn source(&self) -> SourceSystem {
        self.source
    }

    /// Materialize as a stored record once the store has assigned an id.
    pub fn into_record(self, id: i64, created_at: DateTime<Utc>) -> CustomerRecord {
        CustomerRecord {
            id,
            customer_id: self.customer_id,
            name: self.name,
            email: self.email,
            source: self.source,
            created_at,
            updated_at: None,
        }
    }
}

impl TryFrom<CustomerCreate> for NewCustomer {
    type Error = CustomerError;

    fn try_from(value: CustomerCreate) -> Result<Self, Self::Error> {
        value.validate().map_err(first_validation_error)?;
        Ok(Self {
            customer_id: value.customer_id,
            name: value.name,
            email: value.email,
            source: value.source,
        })
    }
}

fn first_validation_error(errors: ValidationErrors) -> CustomerError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message =
                    err.message.as_ref().map_or_else(|| err.code.to_string(), |m| m.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    match fields.into_iter().next() {
        Some((field, message)) => CustomerError::Validation { field, message },
        None => CustomerError::Validation {
            field: "record".to_string(),
            message: errors.to_string(),
        },
    }
}
