//! Resolve a whole imported deck against one catalog snapshot.

use rayon::prelude::*;

use crate::services::config::MatcherSettings;
use crate::services::converter::analysis::set_alias::SetAliasResolver;
use crate::services::converter::models::mapping::CardMapping;
use crate::services::converter::models::types::ImportedRecord;
use crate::services::converter::state::catalog_snapshot::CatalogSnapshot;

/// Build one populated mapping per record, in input order.
///
/// Each mapping is independent, so large batches are spread across the
/// rayon pool; the snapshot is only read.
pub fn convert_records(
    records: Vec<ImportedRecord>,
    snapshot: &CatalogSnapshot,
    resolver: &SetAliasResolver,
    settings: &MatcherSettings,
) -> Vec<CardMapping> {
    let total = records.len();
    let resolve = |record: ImportedRecord| {
        let mut mapping = CardMapping::new(record);
        mapping.populate(snapshot.index(), resolver);
        if settings.auto_select {
            mapping.auto_select();
        }
        mapping
    };

    let mappings: Vec<CardMapping> = if settings.use_parallel(total) {
        records.into_par_iter().map(resolve).collect()
    } else {
        records.into_iter().map(resolve).collect()
    };

    log::debug!(
        "Converted {} records ({} unmatched)",
        total,
        mappings
            .iter()
            .filter(|mapping| mapping.candidates().is_empty())
            .count()
    );
    mappings
}

#[cfg(test)]
#[path = "../tests/pipeline/batch_tests.rs"]
mod tests;
