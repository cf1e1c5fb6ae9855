pub mod errors;

pub use errors::{MatchError, MatchResult};
