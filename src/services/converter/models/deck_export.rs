//! What the deck exporter reads back from a finished conversion.

use serde::Serialize;

use crate::services::catalog::CardRef;
use crate::services::converter::models::mapping::CardMapping;
use crate::services::converter::models::types::MatchStatus;

/// Per-status counts over a batch of mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub resolved: usize,
    pub ambiguous: usize,
    pub unmatched: usize,
    /// Sum of requested quantities across all records.
    pub total_quantity: u64,
}

impl ConversionReport {
    pub fn from_mappings(mappings: &[CardMapping]) -> Self {
        mappings
            .iter()
            .fold(Self::default(), |mut report, mapping| {
                match mapping.status() {
                    MatchStatus::Resolved => report.resolved += 1,
                    MatchStatus::Ambiguous => report.ambiguous += 1,
                    MatchStatus::Unmatched => report.unmatched += 1,
                }
                report.total_quantity += u64::from(mapping.record().quantity());
                report
            })
    }

    pub fn total(&self) -> usize {
        self.resolved + self.ambiguous + self.unmatched
    }
}

/// One line of the output deck.
#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub card: CardRef,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DeckExport {
    pub entries: Vec<DeckEntry>,
    /// Names of records without a selection.
    pub unresolved: Vec<String>,
}

impl DeckExport {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Collect the selected card of every mapping, in mapping order.
pub fn export_selections(mappings: &[CardMapping]) -> DeckExport {
    let mut export = DeckExport::default();
    for mapping in mappings {
        match mapping.selected() {
            Some(card) => export.entries.push(DeckEntry {
                card: CardRef::clone(card),
                quantity: mapping.record().quantity(),
            }),
            None => export
                .unresolved
                .push(mapping.record().card_name().to_string()),
        }
    }
    export
}

#[cfg(test)]
#[path = "../tests/models/deck_export_tests.rs"]
mod tests;
