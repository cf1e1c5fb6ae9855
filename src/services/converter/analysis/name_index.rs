//! First-name index over the searchable part of a catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::services::catalog::{CanonicalSet, CardRef};
use crate::services::converter::core::normalizer;

/// One indexed catalog card together with the set that owns it.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub card: CardRef,
    pub set: Arc<CanonicalSet>,
}

/// Cards sharing one normalized first name, in catalog iteration order.
pub type Bucket = Vec<IndexEntry>;

/// Normalized first sub-name → every searchable card with that first name.
///
/// Built once per catalog snapshot and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    buckets: BTreeMap<String, Bucket>,
    card_count: usize,
}

impl NameIndex {
    /// Index every card of every set with `include_in_searches`.
    ///
    /// Bucket order follows set order, then card order within each set.
    pub fn build(sets: &[Arc<CanonicalSet>]) -> Self {
        let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
        let mut card_count = 0;

        for set in sets.iter().filter(|set| set.include_in_searches) {
            for card in &set.cards {
                let Some(key) = normalizer::first_name_key(&card.name) else {
                    log::warn!(
                        "Skipping card {} in '{}': name has no segments",
                        card.id,
                        set.name
                    );
                    continue;
                };
                buckets.entry(key).or_default().push(IndexEntry {
                    card: Arc::clone(card),
                    set: Arc::clone(set),
                });
                card_count += 1;
            }
        }

        log::debug!(
            "Name index built: {} keys, {} cards",
            buckets.len(),
            card_count
        );

        Self {
            buckets,
            card_count,
        }
    }

    pub fn bucket(&self, key: &str) -> Option<&[IndexEntry]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of distinct first-name keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of indexed cards across all buckets.
    pub fn card_count(&self) -> usize {
        self.card_count
    }
}

#[cfg(test)]
#[path = "../tests/analysis/name_index_tests.rs"]
mod tests;
