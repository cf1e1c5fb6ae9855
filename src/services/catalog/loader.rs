//! Decode an already-loaded catalog document into [`CanonicalSet`]s.

use serde::Deserialize;
use uuid::Uuid;

use super::models::{CanonicalCard, CanonicalSet};
use crate::types::errors::{MatchError, MatchResult};

#[derive(Debug, Deserialize)]
struct CardRecord {
    id: Uuid,
    name: String,
    #[serde(default)]
    multiverse_id: i32,
}

#[derive(Debug, Deserialize)]
struct SetRecord {
    id: Uuid,
    name: String,
    game_id: Uuid,
    #[serde(default = "default_include_in_searches")]
    include_in_searches: bool,
    #[serde(default)]
    cards: Vec<CardRecord>,
}

fn default_include_in_searches() -> bool {
    true
}

/// Parse catalog sets from JSON.
///
/// Accepts both a bare array `[{set1}, {set2}]` and the wrapped form
/// `{"sets": [...]}`. Set and card order is preserved.
pub fn sets_from_json(json: &str) -> MatchResult<Vec<CanonicalSet>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let records: Vec<SetRecord> = match value {
        serde_json::Value::Object(mut map) if map.contains_key("sets") => {
            let sets = map.remove("sets").unwrap_or_default();
            serde_json::from_value(sets)?
        }
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        _ => {
            return Err(MatchError::Catalog(
                "expected array or object with 'sets' key".to_string(),
            ))
        }
    };

    let sets = records
        .into_iter()
        .map(|record| {
            let cards = record
                .cards
                .into_iter()
                .map(|card| CanonicalCard::new(card.id, card.name, card.multiverse_id))
                .collect();
            CanonicalSet::new(
                record.id,
                record.name,
                record.game_id,
                record.include_in_searches,
                cards,
            )
        })
        .collect::<MatchResult<Vec<_>>>()?;

    log::debug!("Decoded {} catalog sets", sets.len());
    Ok(sets)
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
