//! Per-guild configuration document model.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for one guild, persisted as a JSON document keyed by
/// guild id.
///
/// Mutation happens through the explicit methods below; each returns
/// whether the document changed so callers persist only when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GuildConfig {
    guild_id: i64,
    /// Tracked player names in the order they were added.
    #[serde(default)]
    tracked_players: Vec<String>,
    /// Whether completed-event notifications are on for this guild.
    #[serde(default)]
    notifications_enabled: bool,
    /// Channel that receives notifications, when one is configured.
    #[serde(default)]
    notification_channel: Option<i64>,
    /// Keys of events this guild has already been notified about.
    #[serde(default)]
    sent_notifications: BTreeSet<String>,
}

impl GuildConfig {
    /// Create an empty configuration for a guild.
    pub fn new(guild_id: i64) -> Self {
        Self {
            guild_id,
            tracked_players: Vec::new(),
            notifications_enabled: false,
            notification_channel: None,
            sent_notifications: BTreeSet::new(),
        }
    }

    /// Add a player to the tracked list.
    ///
    /// Appends only when the name is not already present, preserving the
    /// order players were added in. Returns true when the list changed.
    pub fn track_player(&mut self, name: &str) -> bool {
        if self.tracked_players.iter().any(|tracked| tracked == name) {
            return false;
        }
        self.tracked_players.push(name.to_string());
        true
    }

    /// Remove a player from the tracked list. Returns true when the list
    /// changed.
    pub fn untrack_player(&mut self, name: &str) -> bool {
        let before = self.tracked_players.len();
        self.tracked_players.retain(|tracked| tracked != name);
        self.tracked_players.len() != before
    }

    /// Update notification settings.
    pub fn set_notifications(&mut self, enabled: bool, channel: Option<i64>) {
        self.notifications_enabled = enabled;
        self.notification_channel = channel;
    }

    /// Record that a notification went out for an event key.
    ///
    /// Returns false when the key was already recorded, so repeated polls
    /// never notify twice.
    pub fn record_notification(&mut self, event_key: &str) -> bool {
        self.sent_notifications.insert(event_key.to_string())
    }

    /// Whether a notification already went out for an event key.
    pub fn notified(&self, event_key: &str) -> bool {
        self.sent_notifications.contains(event_key)
    }

    /// Whether this guild subscribes to notifications: enabled with a
    /// channel configured.
    pub fn subscribed(&self) -> bool {
        self.notifications_enabled && self.notification_channel.is_some()
    }
}
