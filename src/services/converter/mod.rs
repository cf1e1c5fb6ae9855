//! Deck converter core.
//!
//! Resolves imported deck records against the canonical catalog: normalize
//! names, look up the first-name index, filter by sub-names and set aliases,
//! and keep each record's candidates ordered with a default selection.
pub mod analysis;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod state;

// Public types used by callers
pub use analysis::name_index::{IndexEntry, NameIndex};
pub use analysis::set_alias::{SetAliasResolver, LOTR_GAME_ID};
pub use self::core::normalizer::normalize_name;
pub use models::deck_export::{export_selections, ConversionReport, DeckEntry, DeckExport};
pub use models::mapping::CardMapping;
pub use models::result_summary::{CandidateView, MappingView};
pub use models::types::{ImportedRecord, MappingEvent, MatchStatus};
pub use pipeline::batch::convert_records;
pub use pipeline::candidate_finder::find_candidates;
pub use state::catalog_snapshot::{CatalogSnapshot, SharedCatalog};
