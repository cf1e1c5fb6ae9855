pub mod models;

pub use models::*;

use crate::services::converter::analysis::set_alias::SetAliasResolver;
use crate::types::errors::{MatchError, MatchResult};

impl MatcherSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> MatchResult<Self> {
        let settings: MatcherSettings = serde_json::from_str(json)
            .map_err(|e| MatchError::Config(format!("Failed to parse matcher settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> MatchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::Config(format!("Failed to serialize matcher settings: {e}")))
    }

    /// Every alias rule must be bound to a game.
    pub fn validate(&self) -> MatchResult<()> {
        if let Some(rule) = self.set_aliases.iter().find(|rule| rule.game_id.is_nil()) {
            return Err(MatchError::InvalidArgument(format!(
                "set alias rule {:?} has no game identifier",
                rule.prefixes
            )));
        }
        Ok(())
    }

    /// Build the resolver described by `set_aliases`. Later entries for the
    /// same game replace earlier ones.
    pub fn alias_resolver(&self) -> MatchResult<SetAliasResolver> {
        let mut resolver = SetAliasResolver::empty();
        for rule in &self.set_aliases {
            resolver.register(rule.game_id, rule.prefixes.clone())?;
        }
        Ok(resolver)
    }

    /// Whether a batch of `record_count` records should be matched in parallel.
    pub fn use_parallel(&self, record_count: usize) -> bool {
        self.parallel_threshold > 0 && record_count >= self.parallel_threshold
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
