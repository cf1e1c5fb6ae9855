pub mod batch;
pub mod candidate_finder;
