//! Canonical catalog types: cards and the sets that own them.

use std::sync::Arc;

use uuid::Uuid;

use crate::types::errors::{MatchError, MatchResult};

/// Shared handle to a catalog card. Candidate lists compare these by pointer.
pub type CardRef = Arc<CanonicalCard>;

/// A card as it exists in the reference catalog. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CanonicalCard {
    pub id: Uuid,
    /// Display name; split/dual cards join their sub-names with `/`.
    pub name: String,
    /// Owning set, stamped by [`CanonicalSet::new`].
    pub set_id: Uuid,
    pub set_name: String,
    /// Ranking key assigned by the data source. May repeat or be 0.
    pub multiverse_id: i32,
}

impl CanonicalCard {
    pub fn new(id: Uuid, name: impl Into<String>, multiverse_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            set_id: Uuid::nil(),
            set_name: String::new(),
            multiverse_id,
        }
    }
}

/// Pointer identity for catalog cards.
pub fn same_card(a: &CardRef, b: &CardRef) -> bool {
    Arc::ptr_eq(a, b)
}

/// A named group of catalog cards belonging to one game.
#[derive(Debug, Clone)]
pub struct CanonicalSet {
    pub id: Uuid,
    pub name: String,
    pub game_id: Uuid,
    /// Sets excluded from searches are never indexed.
    pub include_in_searches: bool,
    pub cards: Vec<CardRef>,
    /// Highest `multiverse_id` among `cards` (0 when empty). Display ordering only.
    pub max_multiverse_id: i32,
}

impl CanonicalSet {
    /// Build a set, stamping each card with this set's id and name.
    ///
    /// A nil `game_id` leaves the set unbound to any game and is rejected.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        game_id: Uuid,
        include_in_searches: bool,
        cards: Vec<CanonicalCard>,
    ) -> MatchResult<Self> {
        let name = name.into();
        if game_id.is_nil() {
            return Err(MatchError::InvalidArgument(format!(
                "set '{name}' has no game identifier"
            )));
        }

        let cards: Vec<CardRef> = cards
            .into_iter()
            .map(|mut card| {
                card.set_id = id;
                card.set_name = name.clone();
                Arc::new(card)
            })
            .collect();

        let max_multiverse_id = cards
            .iter()
            .map(|card| card.multiverse_id)
            .max()
            .unwrap_or(0);

        Ok(Self {
            id,
            name,
            game_id,
            include_in_searches,
            cards,
            max_multiverse_id,
        })
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
