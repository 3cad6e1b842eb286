//! Cross-source comparison: intersection and exclusive differences.

use std::collections::{BTreeMap, BTreeSet};

use custdedup_types::{CustomerRecord, SourceComparisonResult, SourceSystem};

static NO_IDS: BTreeSet<i64> = BTreeSet::new();

/// Distinct customer identifiers per source, for a fixed list of sources.
///
/// Every requested source has an entry, possibly empty. Records tagged with
/// a source outside the requested list are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePartition {
    sets: BTreeMap<SourceSystem, BTreeSet<i64>>,
}

impl SourcePartition {
    pub fn partition(records: &[CustomerRecord], sources: &[SourceSystem]) -> Self {
        let mut sets: BTreeMap<SourceSystem, BTreeSet<i64>> =
            sources.iter().map(|source| (*source, BTreeSet::new())).collect();

        for record in records {
            if let Some(ids) = sets.get_mut(&record.source) {
                ids.insert(record.customer_id);
            }
        }

        Self { sets }
    }

    /// Sources covered by this partition, in ascending order.
    pub fn sources(&self) -> impl Iterator<Item = SourceSystem> + '_ {
        self.sets.keys().copied()
    }

    /// Distinct identifiers seen in `source`.
    pub fn ids(&self, source: SourceSystem) -> &BTreeSet<i64> {
        self.sets.get(&source).unwrap_or(&NO_IDS)
    }

    /// Cardinality of the distinct identifier set for `source`.
    pub fn count(&self, source: SourceSystem) -> usize {
        self.ids(source).len()
    }

    /// Identifiers present in at least one source.
    pub fn union(&self) -> BTreeSet<i64> {
        self.sets.values().flatten().copied().collect()
    }

    /// Identifiers present in every source.
    pub fn in_all(&self) -> BTreeSet<i64> {
        let Some(first) = self.sets.values().next() else {
            return BTreeSet::new();
        };

        first
            .iter()
            .filter(|id| self.sets.values().all(|ids| ids.contains(*id)))
            .copied()
            .collect()
    }

    /// Identifiers present in `source` and absent from every other source.
    pub fn exclusive_to(&self, source: SourceSystem) -> BTreeSet<i64> {
        self.ids(source)
            .iter()
            .filter(|id| {
                self.sets
                    .iter()
                    .filter(|(other, _)| **other != source)
                    .all(|(_, ids)| !ids.contains(*id))
            })
            .copied()
            .collect()
    }

    /// Identifiers present in exactly `n` sources.
    pub fn in_exactly(&self, n: usize) -> BTreeSet<i64> {
        let mut memberships: BTreeMap<i64, usize> = BTreeMap::new();
        for id in self.sets.values().flatten() {
            *memberships.entry(*id).or_default() += 1;
        }

        memberships.into_iter().filter(|(_, count)| *count == n).map(|(id, _)| id).collect()
    }
}

/// Compare Salesforce, HubSpot and Internal over distinct customer identifiers.
pub fn compare(records: &[CustomerRecord]) -> SourceComparisonResult {
    let partition = SourcePartition::partition(records, &SourceSystem::ALL);

    let mut result = SourceComparisonResult {
        in_all_sources: partition.in_all().into_iter().collect(),
        ..SourceComparisonResult::default()
    };

    for source in SourceSystem::ALL {
        let only: Vec<i64> = partition.exclusive_to(source).into_iter().collect();
        let count = partition.count(source);

        match source {
            SourceSystem::Salesforce => {
                result.only_in_salesforce = only;
                result.salesforce_count = count;
            },
            SourceSystem::Hubspot => {
                result.only_in_hubspot = only;
                result.hubspot_count = count;
            },
            SourceSystem::Internal => {
                result.only_in_internal = only;
                result.internal_count = count;
            },
        }
    }

    result
}
