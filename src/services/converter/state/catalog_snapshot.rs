use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::services::catalog::{CanonicalSet, CardRef};
use crate::services::converter::analysis::name_index::NameIndex;

/// Immutable catalog snapshot with its precomputed name index.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    sets: Vec<Arc<CanonicalSet>>,
    index: NameIndex,
}

impl CatalogSnapshot {
    /// Build a snapshot, indexing the searchable sets once.
    pub fn new(sets: Vec<CanonicalSet>) -> Self {
        let sets: Vec<Arc<CanonicalSet>> = sets.into_iter().map(Arc::new).collect();
        let index = NameIndex::build(&sets);
        Self { sets, index }
    }

    pub fn sets(&self) -> &[Arc<CanonicalSet>] {
        &self.sets
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Every set, newest (highest `max_multiverse_id`) first. Ties keep catalog order.
    pub fn sets_by_recency(&self) -> Vec<Arc<CanonicalSet>> {
        let mut sets = self.sets.clone();
        sets.sort_by(|a, b| b.max_multiverse_id.cmp(&a.max_multiverse_id));
        sets
    }

    /// Look a card up by id across all sets, searchable or not.
    pub fn find_card(&self, card_id: Uuid) -> Option<CardRef> {
        self.sets
            .iter()
            .flat_map(|set| set.cards.iter())
            .find(|card| card.id == card_id)
            .cloned()
    }

    pub fn card_count(&self) -> usize {
        self.sets.iter().map(|set| set.cards.len()).sum()
    }
}

/// Current catalog snapshot, replaced wholesale on reload.
///
/// Readers hold an `Arc` to the snapshot they started with; a reload never
/// touches it.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl SharedCatalog {
    pub fn new(sets: Vec<CanonicalSet>) -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::new(sets))),
        }
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a new snapshot from `sets`, then swap it in.
    pub fn reload(&self, sets: Vec<CanonicalSet>) -> Arc<CatalogSnapshot> {
        let fresh = Arc::new(CatalogSnapshot::new(sets));

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        drop(guard);

        log::debug!(
            "Catalog swapped: {} sets, {} indexed cards",
            fresh.sets().len(),
            fresh.index().card_count()
        );
        fresh
    }
}

#[cfg(test)]
#[path = "../tests/state/catalog_snapshot_tests.rs"]
mod tests;
