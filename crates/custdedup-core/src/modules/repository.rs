//! Customer repository trait for storage abstraction.

use async_trait::async_trait;

use custdedup_types::{CustomerRecord, NewCustomer, SourceSystem};

pub type RepoResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Record store consumed by the service.
///
/// Stores own record lifetime. Only validated `NewCustomer` values can be
/// written, so malformed records are rejected before a store is involved.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Short backend name for status output.
    fn backend(&self) -> &'static str;

    /// Whether records are lost when the process exits.
    fn is_ephemeral(&self) -> bool {
        false
    }

    /// Store one record and return it with its assigned storage id.
    async fn insert_one(&self, customer: NewCustomer) -> RepoResult<CustomerRecord>;

    /// Store every record or none of them.
    async fn insert_many(&self, customers: Vec<NewCustomer>) -> RepoResult<Vec<CustomerRecord>>;

    /// All records, ordered by storage id.
    async fn list_all(&self) -> RepoResult<Vec<CustomerRecord>>;

    /// Records from one source, ordered by storage id.
    async fn list_by_source(&self, source: SourceSystem) -> RepoResult<Vec<CustomerRecord>>;

    /// Delete every record and return how many were removed.
    async fn clear_all(&self) -> RepoResult<u64>;
}
