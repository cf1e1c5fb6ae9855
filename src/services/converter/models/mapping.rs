//! Candidate list for one imported record.
//!
//! Invariants:
//! - no card appears twice (pointer identity)
//! - candidates are sorted by descending `multiverse_id`, ties in arrival order
//! - the selection is empty or one of the candidates

use std::mem;

use uuid::Uuid;

use crate::services::catalog::{same_card, CardRef};
use crate::services::converter::analysis::name_index::NameIndex;
use crate::services::converter::analysis::set_alias::SetAliasResolver;
use crate::services::converter::models::types::{ImportedRecord, MappingEvent, MatchStatus};
use crate::services::converter::pipeline::candidate_finder;
use crate::types::errors::{MatchError, MatchResult};

#[derive(Debug, Clone)]
pub struct CardMapping {
    record: ImportedRecord,
    candidates: Vec<CardRef>,
    selected: Option<CardRef>,
    events: Vec<MappingEvent>,
}

impl CardMapping {
    pub fn new(record: ImportedRecord) -> Self {
        Self {
            record,
            candidates: Vec::new(),
            selected: None,
            events: Vec::new(),
        }
    }

    pub fn record(&self) -> &ImportedRecord {
        &self.record
    }

    /// Candidates, highest `multiverse_id` first.
    pub fn candidates(&self) -> &[CardRef] {
        &self.candidates
    }

    /// The card used when the deck is exported.
    pub fn selected(&self) -> Option<&CardRef> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> MatchStatus {
        MatchStatus::from_candidate_count(self.candidates.len())
    }

    pub fn contains(&self, card: &CardRef) -> bool {
        self.position_of(card).is_some()
    }

    /// Add a candidate in `multiverse_id` order. Returns false if already present.
    pub fn insert(&mut self, card: CardRef) -> bool {
        if self.contains(&card) {
            return false;
        }

        let index = match self.candidates.last() {
            None => 0,
            Some(last) if card.multiverse_id <= last.multiverse_id => self.candidates.len(),
            Some(_) => self
                .candidates
                .iter()
                .position(|existing| existing.multiverse_id < card.multiverse_id)
                .unwrap_or(self.candidates.len()),
        };

        self.events.push(MappingEvent::CandidateAdded {
            card_id: card.id,
            index,
        });
        self.candidates.insert(index, card);
        true
    }

    /// Remove a candidate. Clears the selection if it was the selected card.
    pub fn remove(&mut self, card: &CardRef) -> bool {
        let Some(index) = self.position_of(card) else {
            return false;
        };

        let removed = self.candidates.remove(index);
        self.events.push(MappingEvent::CandidateRemoved {
            card_id: removed.id,
            index,
        });

        if self
            .selected
            .as_ref()
            .is_some_and(|selected| same_card(selected, &removed))
        {
            self.replace_selection(None);
        }
        true
    }

    /// Select the candidate with the highest `multiverse_id`, earliest on ties.
    /// Clears the selection when there are no candidates.
    pub fn auto_select(&mut self) {
        let mut best: Option<&CardRef> = None;
        for candidate in &self.candidates {
            if best.map_or(true, |current| candidate.multiverse_id > current.multiverse_id) {
                best = Some(candidate);
            }
        }
        let best = best.cloned();
        self.replace_selection(best);
    }

    /// Set the selection directly. `Some` must name a current candidate.
    pub fn select(&mut self, card: Option<&CardRef>) -> MatchResult<()> {
        match card {
            None => self.replace_selection(None),
            Some(card) => {
                let Some(index) = self.position_of(card) else {
                    return Err(MatchError::InvalidArgument(format!(
                        "card '{}' is not a candidate for '{}'",
                        card.name,
                        self.record.card_name()
                    )));
                };
                let chosen = CardRef::clone(&self.candidates[index]);
                self.replace_selection(Some(chosen));
            }
        }
        Ok(())
    }

    /// Manual override: add `card` as a candidate if needed, then select it.
    pub fn choose(&mut self, card: CardRef) {
        self.insert(CardRef::clone(&card));
        self.replace_selection(Some(card));
    }

    /// Add every catalog card matching this record. Does not select.
    ///
    /// Returns how many new candidates were added.
    pub fn populate(&mut self, index: &NameIndex, resolver: &SetAliasResolver) -> usize {
        let found = candidate_finder::find_candidates(&self.record, index, resolver);
        let added = found.into_iter().filter(|card| self.insert(CardRef::clone(card))).count();

        log::debug!(
            "Populated '{}': {} candidates ({} new)",
            self.record.card_name(),
            self.candidates.len(),
            added
        );
        added
    }

    /// Drop every candidate and the selection.
    pub fn clear(&mut self) {
        for index in (0..self.candidates.len()).rev() {
            let removed = self.candidates.remove(index);
            self.events.push(MappingEvent::CandidateRemoved {
                card_id: removed.id,
                index,
            });
        }
        self.replace_selection(None);
    }

    /// Correct the record's set label. Call [`CardMapping::repopulate`] afterwards.
    pub fn set_card_set(&mut self, card_set: impl Into<String>) {
        self.record.set_card_set(card_set.into());
    }

    /// Clear and populate again, e.g. after the set label was corrected.
    pub fn repopulate(&mut self, index: &NameIndex, resolver: &SetAliasResolver) -> usize {
        self.clear();
        self.populate(index, resolver)
    }

    /// Drain the changes recorded since the last call.
    pub fn take_events(&mut self) -> Vec<MappingEvent> {
        mem::take(&mut self.events)
    }

    fn position_of(&self, card: &CardRef) -> Option<usize> {
        self.candidates
            .iter()
            .position(|candidate| same_card(candidate, card))
    }

    fn replace_selection(&mut self, next: Option<CardRef>) {
        let unchanged = match (&self.selected, &next) {
            (None, None) => true,
            (Some(current), Some(next)) => same_card(current, next),
            _ => false,
        };
        if unchanged {
            return;
        }

        let previous = self.selected.as_ref().map(|card| card.id);
        let current: Option<Uuid> = next.as_ref().map(|card| card.id);
        self.selected = next;
        self.events
            .push(MappingEvent::SelectionChanged { previous, current });
    }
}

#[cfg(test)]
#[path = "../tests/models/mapping_tests.rs"]
mod tests;
