//! Derived analysis results. Recomputed on every call, never stored.

use serde::{Deserialize, Serialize};

use super::SourceSystem;

/// Outcome of collapsing all records to distinct customer identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeduplicationResult {
    /// Number of records read, duplicates included
    pub total_records: usize,
    /// Number of distinct customer identifiers
    pub unique_customers: usize,
    /// `total_records - unique_customers`
    pub duplicates_found: usize,
    /// Distinct customer identifiers, ascending
    pub unique_customer_ids: Vec<i64>,
}

/// Cross-source set relations over distinct customer identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceComparisonResult {
    /// Identifiers present in every source
    pub in_all_sources: Vec<i64>,
    /// Identifiers present in Salesforce and in no other source
    pub only_in_salesforce: Vec<i64>,
    /// Identifiers present in HubSpot and in no other source
    pub only_in_hubspot: Vec<i64>,
    /// Identifiers present in the internal database and in no other source
    pub only_in_internal: Vec<i64>,
    /// Distinct identifiers in Salesforce
    pub salesforce_count: usize,
    /// Distinct identifiers in HubSpot
    pub hubspot_count: usize,
    /// Distinct identifiers in the internal database
    pub internal_count: usize,
}

impl SourceComparisonResult {
    /// Identifiers exclusive to `source`.
    pub fn only_in(&self, source: SourceSystem) -> &[i64] {
        match source {
            SourceSystem::Salesforce => &self.only_in_salesforce,
            SourceSystem::Hubspot => &self.only_in_hubspot,
            SourceSystem::Internal => &self.only_in_internal,
        }
    }

    /// Distinct identifier count for `source`.
    pub const fn count_for(&self, source: SourceSystem) -> usize {
        match source {
            SourceSystem::Salesforce => self.salesforce_count,
            SourceSystem::Hubspot => self.hubspot_count,
            SourceSystem::Internal => self.internal_count,
        }
    }
}
