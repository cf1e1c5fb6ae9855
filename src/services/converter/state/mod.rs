pub mod catalog_snapshot;
