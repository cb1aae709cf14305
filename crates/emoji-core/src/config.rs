//! Engine settings.

use std::path::Path;
use std::time::Duration;

use emoji_common::{Error, FileStore, Loader};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::catalog::FamilyId;
use crate::matcher::TRIGGER;

/// Tunables for one suggestion engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Character that opens the quick picker.
    pub trigger: char,
    /// Quiet period after the last keystroke before searching.
    pub debounce_ms: u64,
    /// Real candidates shown in the quick picker before "show more".
    pub quick_pick_limit: usize,
    /// Grid width of the full picker, for up/down navigation.
    pub full_pick_columns: usize,
    /// Family shown when the full picker opens with an empty query.
    pub default_family: FamilyId,
    /// Glyphs offered as soon as the trigger is typed.
    pub common_emoji: Vec<SmolStr>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            trigger: TRIGGER,
            debounce_ms: 300,
            quick_pick_limit: 5,
            full_pick_columns: 8,
            default_family: FamilyId::People,
            common_emoji: ["🙂", "😂", "❤️", "👍", "🎉"]
                .into_iter()
                .map(SmolStr::new_static)
                .collect(),
        }
    }
}

impl SuggestionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.trigger.is_whitespace() {
            return Err(Error::InvalidConfig(
                "trigger must not be whitespace".to_string(),
            ));
        }
        if self.quick_pick_limit == 0 {
            return Err(Error::InvalidConfig(
                "quick_pick_limit must be at least 1".to_string(),
            ));
        }
        if self.full_pick_columns == 0 {
            return Err(Error::InvalidConfig(
                "full_pick_columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate settings from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config: Self = FileStore::new(path).load()?;
        config.validate()?;
        Ok(config)
    }
}
