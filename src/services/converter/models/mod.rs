pub mod deck_export;
pub mod mapping;
pub mod result_summary;
pub mod types;
