//! Collect every catalog card that could stand for an imported record.

use crate::services::catalog::CardRef;
use crate::services::converter::analysis::name_index::{IndexEntry, NameIndex};
use crate::services::converter::analysis::set_alias::SetAliasResolver;
use crate::services::converter::core::normalizer;
use crate::services::converter::models::types::ImportedRecord;

#[cfg(feature = "debug_matcher")]
use log::debug;

/// Find the catalog cards matching `record`, in bucket order.
///
/// Only the first sub-name selects the bucket. Inside it, sub-names are
/// compared pairwise over the overlap of both lists, so `"Aragorn"` matches
/// `"Aragorn/Strider"` and vice versa. A non-blank set label must also pass
/// the game's set alias rule. An empty result means "no match", not an error.
pub fn find_candidates(
    record: &ImportedRecord,
    index: &NameIndex,
    resolver: &SetAliasResolver,
) -> Vec<CardRef> {
    let query_names = normalizer::normalized_names(record.card_name());
    let Some(first) = query_names.first() else {
        return Vec::new();
    };
    let Some(bucket) = index.bucket(first) else {
        log::trace!("No catalog bucket for '{}'", record.card_name());
        return Vec::new();
    };

    let found: Vec<CardRef> = bucket
        .iter()
        .filter(|entry| is_candidate(entry, &query_names, record, resolver))
        .map(|entry| CardRef::clone(&entry.card))
        .collect();

    log::trace!(
        "'{}' [{}]: {} of {} bucket entries matched",
        record.card_name(),
        record.card_set(),
        found.len(),
        bucket.len()
    );
    found
}

fn is_candidate(
    entry: &IndexEntry,
    query_names: &[String],
    record: &ImportedRecord,
    resolver: &SetAliasResolver,
) -> bool {
    let candidate_names = normalizer::normalized_names(&entry.card.name);
    if !names_agree(query_names, &candidate_names) {
        #[cfg(feature = "debug_matcher")]
        debug!(
            "[CONVERTER] name_mismatch | query={:?} candidate={:?}",
            query_names, candidate_names
        );
        return false;
    }

    if record.has_set()
        && !resolver.sets_match(entry.set.game_id, &entry.set.name, record.card_set())
    {
        #[cfg(feature = "debug_matcher")]
        debug!(
            "[CONVERTER] set_mismatch | card_set={:?} imported_set={:?}",
            entry.set.name,
            record.card_set()
        );
        return false;
    }

    true
}

/// Compare only the sub-names both sides have; extra trailing names are ignored.
pub fn names_agree(query_names: &[String], candidate_names: &[String]) -> bool {
    query_names
        .iter()
        .zip(candidate_names)
        .all(|(query, candidate)| query == candidate)
}

#[cfg(test)]
#[path = "../tests/pipeline/candidate_finder_tests.rs"]
mod tests;
