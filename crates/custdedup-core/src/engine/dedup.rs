//! Collapse a record set to its distinct customer identifiers.

use std::collections::BTreeSet;

use custdedup_types::{CustomerRecord, DeduplicationResult};

/// Count records, distinct identifiers and duplicates across every source.
pub fn analyze(records: &[CustomerRecord]) -> DeduplicationResult {
    let unique: BTreeSet<i64> = records.iter().map(|record| record.customer_id).collect();

    let total_records = records.len();
    let unique_customers = unique.len();

    DeduplicationResult {
        total_records,
        unique_customers,
        // A set built from a sequence is never larger than the sequence.
        duplicates_found: total_records - unique_customers,
        unique_customer_ids: unique.into_iter().collect(),
    }
}
