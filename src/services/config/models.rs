use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::converter::analysis::set_alias::{LOTR_GAME_ID, LOTR_SET_PREFIXES};

/// Set alias prefixes bound to one game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SetAliasConfig {
    pub game_id: Uuid,
    /// Stripped case-insensitively from both labels, in this order.
    pub prefixes: Vec<String>,
}

impl SetAliasConfig {
    pub fn lotr() -> Self {
        Self {
            game_id: LOTR_GAME_ID,
            prefixes: LOTR_SET_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MatcherSettings {
    /// Run `auto_select` after populating each mapping in a batch.
    pub auto_select: bool,
    /// Batches at least this large are matched across threads; 0 disables.
    pub parallel_threshold: usize,
    pub set_aliases: Vec<SetAliasConfig>,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            auto_select: true,
            parallel_threshold: 64,
            set_aliases: vec![SetAliasConfig::lotr()],
        }
    }
}
