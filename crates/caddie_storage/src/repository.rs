//! Guild configuration operations over a document store.

use crate::{DocumentStore, GuildConfig};
use caddie_error::{CaddieResult, StorageError, StorageErrorKind};
use tracing::{debug, info, instrument};

/// Repository for guild configuration documents.
///
/// Configurations are created lazily on first access per guild and
/// persisted back through the store on every change.
#[derive(Debug)]
pub struct GuildConfigRepository<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> GuildConfigRepository<S> {
    /// Create a repository over a document store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a guild's configuration, None when the guild has none yet.
    #[instrument(skip(self))]
    pub async fn get(&self, guild_id: i64) -> CaddieResult<Option<GuildConfig>> {
        let Some(document) = self.store.get(guild_id).await? else {
            return Ok(None);
        };

        let config: GuildConfig = serde_json::from_value(document).map_err(|e| {
            StorageError::new(StorageErrorKind::MalformedDocument(format!(
                "guild {}: {}",
                guild_id, e
            )))
        })?;

        Ok(Some(config))
    }

    /// Fetch a guild's configuration, creating an empty one on first
    /// access.
    #[instrument(skip(self))]
    pub async fn get_or_default(&self, guild_id: i64) -> CaddieResult<GuildConfig> {
        match self.get(guild_id).await? {
            Some(config) => Ok(config),
            None => {
                debug!(guild_id, "No configuration yet, using empty default");
                Ok(GuildConfig::new(guild_id))
            }
        }
    }

    /// Add a player to a guild's tracked list.
    ///
    /// Creates the configuration on first use; persists only when the
    /// list actually changed.
    #[instrument(skip(self))]
    pub async fn add_tracked_player(&self, guild_id: i64, name: &str) -> CaddieResult<GuildConfig> {
        let mut config = self.get_or_default(guild_id).await?;
        if config.track_player(name) {
            info!(guild_id, player = name, "Tracking new player");
            self.persist(&config).await?;
        }
        Ok(config)
    }

    /// Remove a player from a guild's tracked list.
    #[instrument(skip(self))]
    pub async fn remove_tracked_player(
        &self,
        guild_id: i64,
        name: &str,
    ) -> CaddieResult<GuildConfig> {
        let mut config = self.get_or_default(guild_id).await?;
        if config.untrack_player(name) {
            info!(guild_id, player = name, "Untracked player");
            self.persist(&config).await?;
        }
        Ok(config)
    }

    /// Update a guild's notification settings.
    #[instrument(skip(self))]
    pub async fn set_notifications(
        &self,
        guild_id: i64,
        enabled: bool,
        channel: Option<i64>,
    ) -> CaddieResult<GuildConfig> {
        let mut config = self.get_or_default(guild_id).await?;
        config.set_notifications(enabled, channel);
        self.persist(&config).await?;
        info!(guild_id, enabled, ?channel, "Updated notification settings");
        Ok(config)
    }

    /// Record that a notification went out for an event key.
    ///
    /// Returns false without writing when the key was already recorded.
    #[instrument(skip(self))]
    pub async fn record_notification(&self, guild_id: i64, event_key: &str) -> CaddieResult<bool> {
        let mut config = self.get_or_default(guild_id).await?;
        if !config.record_notification(event_key) {
            return Ok(false);
        }
        self.persist(&config).await?;
        Ok(true)
    }

    async fn persist(&self, config: &GuildConfig) -> CaddieResult<()> {
        let document = serde_json::to_value(config).map_err(|e| {
            StorageError::new(StorageErrorKind::MalformedDocument(format!(
                "guild {}: {}",
                config.guild_id(),
                e
            )))
        })?;
        self.store.set(*config.guild_id(), document).await
    }
}
