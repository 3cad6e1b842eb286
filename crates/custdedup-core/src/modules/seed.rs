//! Load fixture customers into a store.
//!
//! The seed file uses the bulk upload shape: `{ "customers": [...] }`.

use std::path::Path;

use tracing::info;

use custdedup_types::{CustomerBulkUpload, CustomerRecord, DeduplicationResult, SourceSystem};

use crate::engine;
use crate::error::AppResult;
use crate::modules::service::CustomerService;

/// What a seeding run stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    /// Records removed before loading (0 when appending)
    pub cleared: u64,
    /// Records loaded from the file
    pub loaded: usize,
    /// Raw record count per source, in `SourceSystem::ALL` order
    pub per_source: Vec<(SourceSystem, usize)>,
    /// Deduplication over the loaded records only
    pub dedup: DeduplicationResult,
}

impl SeedSummary {
    fn from_records(cleared: u64, records: &[CustomerRecord]) -> Self {
        let per_source = SourceSystem::ALL
            .iter()
            .map(|source| (*source, records.iter().filter(|r| r.source == *source).count()))
            .collect();

        Self {
            cleared,
            loaded: records.len(),
            per_source,
            dedup: engine::analyze(records),
        }
    }
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> AppResult<CustomerBulkUpload> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Validate the whole upload, optionally clear the store, then insert
/// everything. Validation runs first so an invalid file leaves the store
/// untouched.
pub async fn seed(
    service: &CustomerService,
    upload: CustomerBulkUpload,
    clear_first: bool,
) -> AppResult<SeedSummary> {
    let customers = upload.validate_all()?;

    let cleared = if clear_first {
        let cleared = service.clear_all_customers().await?;
        info!("Cleared {} existing customer records", cleared);
        cleared
    } else {
        0
    };

    let records = service.store_customers(customers).await?;
    info!("Successfully loaded {} customer records", records.len());

    Ok(SeedSummary::from_records(cleared, &records))
}
