//! Record builders shared by engine and service tests.

use chrono::{TimeZone, Utc};
use custdedup_types::{CustomerCreate, CustomerRecord, SourceSystem};

pub(crate) fn record(id: i64, customer_id: i64, source: SourceSystem) -> CustomerRecord {
    CustomerRecord {
        id,
        customer_id,
        name: format!("Customer {customer_id}"),
        email: format!("customer{customer_id}@example.com"),
        source,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: None,
    }
}

/// Salesforce {101, 102, 103}, HubSpot {103, 104, 105}, Internal {102, 105, 106}.
pub(crate) fn sample_payloads() -> Vec<CustomerCreate> {
    use SourceSystem::{Hubspot, Internal, Salesforce};

    vec![
        CustomerCreate::new(101, "John Doe", "john@example.com", Salesforce),
        CustomerCreate::new(102, "Jane Smith", "jane@example.com", Salesforce),
        CustomerCreate::new(103, "Bob Johnson", "bob@example.com", Salesforce),
        CustomerCreate::new(103, "Bob Johnson", "bob@example.com", Hubspot),
        CustomerCreate::new(104, "Alice Williams", "alice@example.com", Hubspot),
        CustomerCreate::new(105, "Charlie Brown", "charlie@example.com", Hubspot),
        CustomerCreate::new(102, "Jane Smith", "jane@example.com", Internal),
        CustomerCreate::new(105, "Charlie Brown", "charlie@example.com", Internal),
        CustomerCreate::new(106, "David Lee", "david@example.com", Internal),
    ]
}

pub(crate) fn sample_records() -> Vec<CustomerRecord> {
    sample_payloads()
        .into_iter()
        .zip(1..)
        .map(|(payload, id)| record(id, payload.customer_id, payload.source))
        .collect()
}
