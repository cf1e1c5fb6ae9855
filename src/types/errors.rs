use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Catalog error: {0}")]
    Catalog(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MatchError {
    fn from(error: serde_json::Error) -> Self {
        MatchError::Catalog(error.to_string())
    }
}

impl Serialize for MatchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
