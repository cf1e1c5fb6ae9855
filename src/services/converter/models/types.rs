//! Domain types for the converter: imported records, statuses, change events.

use serde::Serialize;
use uuid::Uuid;

use crate::services::converter::core::normalizer;
use crate::types::errors::{MatchError, MatchResult};

/// One parsed deck line awaiting resolution against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedRecord {
    card_name: String,
    card_set: String,
    quantity: u32,
}

impl ImportedRecord {
    /// `card_set` may be empty when the source gives no set.
    ///
    /// Rejects names without any non-empty `/` segment and a zero quantity.
    pub fn new(
        card_name: impl Into<String>,
        card_set: impl Into<String>,
        quantity: u32,
    ) -> MatchResult<Self> {
        let card_name = card_name.into();
        if normalizer::split_names(&card_name).next().is_none() {
            return Err(MatchError::InvalidArgument(format!(
                "card name '{card_name}' has no name segments"
            )));
        }
        if quantity == 0 {
            return Err(MatchError::InvalidArgument(format!(
                "quantity for '{card_name}' must be positive"
            )));
        }

        Ok(Self {
            card_name,
            card_set: card_set.into(),
            quantity,
        })
    }

    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    pub fn card_set(&self) -> &str {
        &self.card_set
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// True when the set label is blank and set comparison is skipped.
    pub fn has_set(&self) -> bool {
        !self.card_set.trim().is_empty()
    }

    pub(crate) fn set_card_set(&mut self, card_set: String) {
        self.card_set = card_set;
    }
}

/// Resolution state of a mapping, derived from its candidate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    /// Exactly one candidate.
    Resolved,
    /// More than one candidate; the user may pick another.
    Ambiguous,
    /// No candidate; needs manual resolution.
    Unmatched,
}

impl MatchStatus {
    pub fn from_candidate_count(count: usize) -> Self {
        match count {
            0 => MatchStatus::Unmatched,
            1 => MatchStatus::Resolved,
            _ => MatchStatus::Ambiguous,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Resolved => write!(f, "Resolved"),
            MatchStatus::Ambiguous => write!(f, "Ambiguous"),
            MatchStatus::Unmatched => write!(f, "Unmatched"),
        }
    }
}

/// Change to a mapping, recorded for the presentation layer to drain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum MappingEvent {
    #[serde(rename_all = "camelCase")]
    CandidateAdded { card_id: Uuid, index: usize },
    #[serde(rename_all = "camelCase")]
    CandidateRemoved { card_id: Uuid, index: usize },
    #[serde(rename_all = "camelCase")]
    SelectionChanged {
        previous: Option<Uuid>,
        current: Option<Uuid>,
    },
}

#[cfg(test)]
#[path = "../tests/models/types_tests.rs"]
mod tests;
