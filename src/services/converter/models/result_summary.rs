use serde::Serialize;
use uuid::Uuid;

use crate::services::catalog::CardRef;
use crate::services::converter::models::mapping::CardMapping;
use crate::services::converter::models::types::MatchStatus;

/// Serializable snapshot of one candidate for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateView {
    pub card_id: Uuid,
    pub name: String,
    pub set_name: String,
    pub multiverse_id: i32,
}

impl From<&CardRef> for CandidateView {
    fn from(card: &CardRef) -> Self {
        Self {
            card_id: card.id,
            name: card.name.clone(),
            set_name: card.set_name.clone(),
            multiverse_id: card.multiverse_id,
        }
    }
}

/// Serializable snapshot of a mapping: the record, its candidates and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingView {
    pub card_name: String,
    pub card_set: String,
    pub quantity: u32,
    pub status: MatchStatus,
    pub summary: String,
    pub candidates: Vec<CandidateView>,
    pub selected_id: Option<Uuid>,
}

impl CardMapping {
    /// Human-friendly summary for the frontend.
    pub fn summary(&self) -> String {
        match self.status() {
            MatchStatus::Resolved => match self.selected() {
                Some(card) => format!("Matched to {} ({})", card.name, card.set_name),
                None => "One possible match found".to_string(),
            },
            MatchStatus::Ambiguous => {
                let count = self.candidates().len();
                match self.selected() {
                    Some(card) => format!(
                        "{count} possible matches, using {} ({})",
                        card.name, card.set_name
                    ),
                    None => format!("{count} possible matches found"),
                }
            }
            MatchStatus::Unmatched => {
                format!("No match found for '{}'", self.record().card_name())
            }
        }
    }

    pub fn view(&self) -> MappingView {
        MappingView {
            card_name: self.record().card_name().to_string(),
            card_set: self.record().card_set().to_string(),
            quantity: self.record().quantity(),
            status: self.status(),
            summary: self.summary(),
            candidates: self.candidates().iter().map(CandidateView::from).collect(),
            selected_id: self.selected().map(|card| card.id),
        }
    }
}

#[cfg(test)]
#[path = "../tests/models/result_summary_tests.rs"]
mod tests;
