//! In-process customer repository.
//!
//! Used when no database is configured, and by tests. A single `RwLock`
//! guards the record list, so bulk inserts and clears are atomic with
//! respect to readers.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use custdedup_types::{CustomerRecord, NewCustomer, SourceSystem};

use crate::modules::repository::{CustomerRepository, RepoResult};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    records: Vec<CustomerRecord>,
}

impl MemoryState {
    fn store(&mut self, customer: NewCustomer) -> CustomerRecord {
        self.last_id += 1;
        let record = customer.into_record(self.last_id, Utc::now());
        self.records.push(record.clone());
        record
    }
}

/// Customer repository backed by a vector in memory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn is_ephemeral(&self) -> bool {
        true
    }

    async fn insert_one(&self, customer: NewCustomer) -> RepoResult<CustomerRecord> {
        Ok(self.state.write().await.store(customer))
    }

    async fn insert_many(&self, customers: Vec<NewCustomer>) -> RepoResult<Vec<CustomerRecord>> {
        let mut state = self.state.write().await;
        Ok(customers.into_iter().map(|customer| state.store(customer)).collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<CustomerRecord>> {
        Ok(self.state.read().await.records.clone())
    }

    async fn list_by_source(&self, source: SourceSystem) -> RepoResult<Vec<CustomerRecord>> {
        let state = self.state.read().await;
        Ok(state.records.iter().filter(|record| record.source == source).cloned().collect())
    }

    async fn clear_all(&self) -> RepoResult<u64> {
        let mut state = self.state.write().await;
        let deleted = state.records.len() as u64;
        state.records.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custdedup_types::CustomerCreate;

    fn new_customer(customer_id: i64, source: SourceSystem) -> NewCustomer {
        NewCustomer::try_from(CustomerCreate::new(
            customer_id,
            "Test User",
            "test@example.com",
            source,
        ))
        .unwrap()
    }

    #[test]
    fn test_reports_ephemeral_backend() {
        let repo = InMemoryCustomerRepository::new();
        assert_eq!(repo.backend(), "memory");
        assert!(repo.is_ephemeral());
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo.insert_one(new_customer(999, SourceSystem::Salesforce)).await.unwrap();
        let second = repo.insert_one(new_customer(999, SourceSystem::Salesforce)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.customer_id, second.customer_id);
    }

    #[tokio::test]
    async fn test_list_by_source_filters() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert_many(vec![
            new_customer(1, SourceSystem::Salesforce),
            new_customer(2, SourceSystem::Hubspot),
            new_customer(3, SourceSystem::Hubspot),
        ])
        .await
        .unwrap();

        let hubspot = repo.list_by_source(SourceSystem::Hubspot).await.unwrap();
        assert_eq!(hubspot.len(), 2);
        assert!(hubspot.iter().all(|r| r.source == SourceSystem::Hubspot));
        assert!(repo.list_by_source(SourceSystem::Internal).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_returns_count_and_keeps_ids_monotonic() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert_many(vec![
            new_customer(1, SourceSystem::Internal),
            new_customer(2, SourceSystem::Internal),
        ])
        .await
        .unwrap();

        assert_eq!(repo.clear_all().await.unwrap(), 2);
        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.clear_all().await.unwrap(), 0);

        let next = repo.insert_one(new_customer(3, SourceSystem::Internal)).await.unwrap();
        assert_eq!(next.id, 3);
    }
}
