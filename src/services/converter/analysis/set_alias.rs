//! Game-specific set label equivalence.
//!
//! Data sources disagree on set naming (`"The Hobbit - Over Hill and Under Hill"`
//! vs `"Over Hill and Under Hill"`). Each game registers an ordered list of
//! alias prefixes that are stripped from both labels before comparing keys.

use std::collections::HashMap;

use uuid::Uuid;

use crate::services::converter::core::normalizer;
use crate::types::errors::{MatchError, MatchResult};

/// The Lord of the Rings: The Card Game.
pub const LOTR_GAME_ID: Uuid = Uuid::from_u128(0xa21a_f4e8_be4b_4cda_a6b6_534f_9717_391f);

/// Alias prefixes for LoTR set names, applied in this order.
pub const LOTR_SET_PREFIXES: &[&str] = &["The Hobbit", "The "];

/// Characters dropped after a stripped prefix (`"The Hobbit - "`, `"The Hobbit: "`).
const PREFIX_SEPARATORS: &[char] = &[' ', ':', '-'];

#[derive(Debug, Clone)]
pub struct SetAliasResolver {
    rules: HashMap<Uuid, Vec<String>>,
}

impl Default for SetAliasResolver {
    fn default() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            LOTR_GAME_ID,
            LOTR_SET_PREFIXES.iter().map(|p| p.to_string()).collect(),
        );
        Self { rules }
    }
}

impl SetAliasResolver {
    /// Resolver with no game rules: every set label matches.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Bind an ordered prefix list to a game, replacing any previous binding.
    pub fn register(&mut self, game_id: Uuid, prefixes: Vec<String>) -> MatchResult<()> {
        if game_id.is_nil() {
            return Err(MatchError::InvalidArgument(
                "set alias rule requires a game identifier".to_string(),
            ));
        }
        self.rules.insert(game_id, prefixes);
        Ok(())
    }

    pub fn has_rule(&self, game_id: Uuid) -> bool {
        self.rules.contains_key(&game_id)
    }

    /// Whether a catalog card's set label and an imported set label name the same set.
    ///
    /// Games without a rule, and blank imported labels, always match.
    pub fn sets_match(&self, game_id: Uuid, card_set: &str, imported_set: &str) -> bool {
        if imported_set.trim().is_empty() {
            return true;
        }
        let Some(prefixes) = self.rules.get(&game_id) else {
            return true;
        };

        let card_key = normalizer::normalize_name(strip_aliases(card_set, prefixes));
        let imported_key = normalizer::normalize_name(strip_aliases(imported_set, prefixes));
        card_key == imported_key
    }
}

/// Strip each alias prefix in turn; each one applies at most once.
fn strip_aliases<'a>(label: &'a str, prefixes: &[String]) -> &'a str {
    prefixes.iter().fold(label, |current, prefix| {
        match strip_prefix_ignore_case(current, prefix) {
            Some(rest) => rest.trim_start_matches(PREFIX_SEPARATORS),
            None => current,
        }
    })
}

fn strip_prefix_ignore_case<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = label.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        let (idx, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = idx + actual.len_utf8();
    }
    Some(&label[end..])
}

#[cfg(test)]
#[path = "../tests/analysis/set_alias_tests.rs"]
mod tests;
