//! Customer service: boundary validation, persistence and set analysis over
//! an injected record store.

use std::sync::Arc;

use tracing::{debug, info};

use custdedup_types::{
    CustomerBulkUpload, CustomerCreate, CustomerRecord, DeduplicationResult, NewCustomer,
    SourceComparisonResult, SourceSystem,
};

use crate::engine;
use crate::error::AppResult;
use crate::modules::repository::CustomerRepository;

/// Entry point for every customer operation.
///
/// Holds no state of its own besides the store handle; each analysis reads
/// the store's current contents and recomputes from scratch.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerRepository>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub fn is_ephemeral(&self) -> bool {
        self.store.is_ephemeral()
    }

    /// Validate and store a single record.
    pub async fn create_customer(&self, payload: CustomerCreate) -> AppResult<CustomerRecord> {
        let customer = NewCustomer::try_from(payload)?;
        let record = self.store.insert_one(customer).await?;
        debug!(
            "Stored customer {} from {} as record {}",
            record.customer_id, record.source, record.id
        );
        Ok(record)
    }

    /// Validate every record, then store all of them. Nothing is stored if
    /// any record is invalid.
    pub async fn bulk_create_customers(
        &self,
        upload: CustomerBulkUpload,
    ) -> AppResult<Vec<CustomerRecord>> {
        let customers = upload.validate_all()?;
        self.store_customers(customers).await
    }

    /// Store an already-validated batch atomically.
    pub async fn store_customers(
        &self,
        customers: Vec<NewCustomer>,
    ) -> AppResult<Vec<CustomerRecord>> {
        let records = self.store.insert_many(customers).await?;
        info!("Bulk uploaded {} customer records", records.len());
        Ok(records)
    }

    pub async fn list_customers(&self) -> AppResult<Vec<CustomerRecord>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn customers_by_source(
        &self,
        source: SourceSystem,
    ) -> AppResult<Vec<CustomerRecord>> {
        Ok(self.store.list_by_source(source).await?)
    }

    /// Like `customers_by_source`, for an unparsed tag. Unknown tags fail
    /// with `CustomerError::InvalidSource`.
    pub async fn customers_by_source_tag(&self, tag: &str) -> AppResult<Vec<CustomerRecord>> {
        let source: SourceSystem = tag.parse()?;
        self.customers_by_source(source).await
    }

    pub async fn deduplicate_customers(&self) -> AppResult<DeduplicationResult> {
        let records = self.store.list_all().await?;
        let result = engine::analyze(&records);
        debug!(
            total = result.total_records,
            unique = result.unique_customers,
            duplicates = result.duplicates_found,
            "Deduplication analysis complete"
        );
        Ok(result)
    }

    pub async fn compare_sources(&self) -> AppResult<SourceComparisonResult> {
        let records = self.store.list_all().await?;
        let result = engine::compare(&records);
        debug!(
            in_all = result.in_all_sources.len(),
            salesforce = result.salesforce_count,
            hubspot = result.hubspot_count,
            internal = result.internal_count,
            "Source comparison complete"
        );
        Ok(result)
    }

    pub async fn clear_all_customers(&self) -> AppResult<u64> {
        let deleted = self.store.clear_all().await?;
        info!("Deleted {} customer records", deleted);
        Ok(deleted)
    }
}
