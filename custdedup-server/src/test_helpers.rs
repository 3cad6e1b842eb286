//! Test helpers for custdedup-server unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use custdedup_core::{
    CustomerRepository, CustomerService, InMemoryCustomerRepository, RepoResult, RepositoryError,
};
use custdedup_types::{CustomerCreate, CustomerRecord, NewCustomer, SourceSystem};

use crate::router::build_router;
use crate::state::AppState;

/// `AppState` over a fresh in-memory store.
pub fn test_app_state() -> AppState {
    AppState::new(CustomerService::new(Arc::new(InMemoryCustomerRepository::new())))
}

/// Full router (including `/api/v1`) behind an in-process test server.
pub fn test_server() -> TestServer {
    TestServer::new(build_router(test_app_state())).expect("failed to start test server")
}

/// Store whose every operation fails, as an unreachable database would.
pub struct UnavailableRepository;

fn unavailable<T>() -> RepoResult<T> {
    Err(RepositoryError::Database("connection refused".to_string()))
}

#[async_trait]
impl CustomerRepository for UnavailableRepository {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn insert_one(&self, _customer: NewCustomer) -> RepoResult<CustomerRecord> {
        unavailable()
    }

    async fn insert_many(&self, _customers: Vec<NewCustomer>) -> RepoResult<Vec<CustomerRecord>> {
        unavailable()
    }

    async fn list_all(&self) -> RepoResult<Vec<CustomerRecord>> {
        unavailable()
    }

    async fn list_by_source(&self, _source: SourceSystem) -> RepoResult<Vec<CustomerRecord>> {
        unavailable()
    }

    async fn clear_all(&self) -> RepoResult<u64> {
        unavailable()
    }
}

/// Full router over a store that rejects every call.
pub fn unavailable_test_server() -> TestServer {
    let state = AppState::new(CustomerService::new(Arc::new(UnavailableRepository)));
    TestServer::new(build_router(state)).expect("failed to start test server")
}

pub fn customer(customer_id: i64, name: &str, email: &str, source: SourceSystem) -> CustomerCreate {
    CustomerCreate::new(customer_id, name, email, source)
}

/// The nine fixture records: Salesforce {101,102,103}, HubSpot {103,104,105},
/// Internal {102,105,106}. No id is in every source.
pub fn sample_customers() -> Vec<CustomerCreate> {
    use SourceSystem::{Hubspot, Internal, Salesforce};

    vec![
        customer(101, "John Doe", "john@example.com", Salesforce),
        customer(102, "Jane Smith", "jane@example.com", Salesforce),
        customer(103, "Bob Johnson", "bob@example.com", Salesforce),
        customer(103, "Bob Johnson", "bob@example.com", Hubspot),
        customer(104, "Alice Williams", "alice@example.com", Hubspot),
        customer(105, "Charlie Brown", "charlie@example.com", Hubspot),
        customer(102, "Jane Smith", "jane@example.com", Internal),
        customer(105, "Charlie Brown", "charlie@example.com", Internal),
        customer(106, "David Lee", "david@example.com", Internal),
    ]
}

/// Bulk upload body for the fixture records.
pub fn sample_upload() -> serde_json::Value {
    serde_json::json!({ "customers": sample_customers() })
}
