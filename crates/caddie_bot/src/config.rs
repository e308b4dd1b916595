//! Bot configuration.
//!
//! One explicit configuration object wires the whole integration.
//! Optional collaborators appear as nullable references: a missing
//! `[search]` section (and missing environment credentials) simply means
//! the bot runs without search.

use crate::notify::NotifierConfig;
use caddie_cache::QueryCacheConfig;
use caddie_error::{CaddieResult, ConfigError};
use caddie_scoreboard::SCOREBOARD_URL;
use caddie_search::SearchCredentials;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the bot integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct BotConfig {
    /// Scoreboard provider configuration
    #[serde(default)]
    scoreboard: ScoreboardConfig,
    /// Query cache configuration
    #[serde(default)]
    cache: QueryCacheConfig,
    /// Notification poller configuration
    #[serde(default)]
    notifications: NotifierConfig,
    /// Search collaborator credentials; None disables search
    #[serde(default)]
    search: Option<SearchSettings>,
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CaddieResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Resolve search credentials: the `[search]` section when present,
    /// otherwise the environment, otherwise None.
    pub fn search_credentials(&self) -> Option<SearchCredentials> {
        match &self.search {
            Some(settings) => Some(SearchCredentials::new(
                settings.engine_id(),
                settings.api_key(),
            )),
            None => SearchCredentials::from_env(),
        }
    }
}

/// Scoreboard provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ScoreboardConfig {
    /// Scoreboard endpoint URL
    #[serde(default = "default_scoreboard_url")]
    url: String,
}

fn default_scoreboard_url() -> String {
    SCOREBOARD_URL.to_string()
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            url: default_scoreboard_url(),
        }
    }
}

/// Explicit search credentials within the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct SearchSettings {
    /// Search engine id
    engine_id: String,
    /// Search API key
    api_key: String,
}
