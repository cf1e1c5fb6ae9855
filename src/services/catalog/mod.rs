//! Canonical card catalog consumed by the converter.

pub mod loader;
pub mod models;

pub use loader::sets_from_json;
pub use models::{same_card, CanonicalCard, CanonicalSet, CardRef};
