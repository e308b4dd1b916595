//! Periodic completed-event notification poller.

use crate::messages::{OutboundMessage, completion_embed};
use caddie_error::CaddieResult;
use caddie_scoreboard::{Event, Leaderboard, ScoreboardProvider};
use caddie_storage::{DocumentStore, GuildConfigRepository};
use chrono::Utc;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Contract for the outbound chat collaborator.
#[async_trait::async_trait]
pub trait ChatSink: Send + Sync {
    /// Dispatch one formatted message to its channel.
    async fn send(&self, message: OutboundMessage) -> CaddieResult<()>;
}

// Shared handles delegate, so the platform client can back several
// components.
#[async_trait::async_trait]
impl<T: ChatSink + ?Sized> ChatSink for std::sync::Arc<T> {
    async fn send(&self, message: OutboundMessage) -> CaddieResult<()> {
        (**self).send(message).await
    }
}

/// Configuration for the notification poller.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct NotifierConfig {
    /// How often to poll the scoreboard (seconds)
    #[serde(default = "default_poll_interval_secs")]
    #[builder(default = "default_poll_interval_secs()")]
    poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    300 // 5 minutes
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl NotifierConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> NotifierConfigBuilder {
        NotifierConfigBuilder::default()
    }

    /// The poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Message types for the notification poller.
#[derive(Debug)]
pub enum NotifierMessage {
    /// Run a completed-event sweep now
    Check,
    /// Shut down the poller
    Shutdown,
}

/// Poller that notifies subscribed guild channels about newly completed
/// events.
///
/// Shares the scoreboard read path with the interactive commands. Guild
/// ids come from the chat platform at wiring time; the sweep skips any
/// guild without an enabled subscription.
pub struct Notifier<P: ScoreboardProvider, S: DocumentStore, C: ChatSink> {
    config: NotifierConfig,
    scoreboard: P,
    repository: GuildConfigRepository<S>,
    sink: C,
    guild_ids: Vec<i64>,
    rx: mpsc::Receiver<NotifierMessage>,
}

impl<P: ScoreboardProvider, S: DocumentStore, C: ChatSink> Notifier<P, S, C> {
    /// Creates a new notification poller.
    pub fn new(
        config: NotifierConfig,
        scoreboard: P,
        repository: GuildConfigRepository<S>,
        sink: C,
        guild_ids: Vec<i64>,
        rx: mpsc::Receiver<NotifierMessage>,
    ) -> Self {
        Self {
            config,
            scoreboard,
            repository,
            sink,
            guild_ids,
            rx,
        }
    }

    /// Runs the poller loop until shutdown.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!(
            interval_secs = self.config.poll_interval_secs,
            guilds = self.guild_ids.len(),
            "Notification poller started"
        );

        let mut ticker = tokio::time::interval(self.config.poll_interval());
        // The first tick fires immediately; skip it so startup does not
        // double-send alongside an interactive request.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.check_completed().await {
                        error!(error = %e, "Completed-event sweep failed");
                    }
                }
                msg = self.rx.recv() => match msg {
                    Some(NotifierMessage::Check) => {
                        if let Err(e) = self.check_completed().await {
                            error!(error = %e, "Completed-event sweep failed");
                        }
                    }
                    Some(NotifierMessage::Shutdown) | None => {
                        info!("Notification poller shutting down");
                        break;
                    }
                },
            }
        }
    }

    /// Run one completed-event sweep, returning how many notifications
    /// went out.
    ///
    /// A scoreboard fetch failure ends the sweep with an error; a failure
    /// for one guild is logged and does not stop the others.
    #[instrument(skip(self))]
    pub async fn check_completed(&self) -> CaddieResult<usize> {
        let scoreboard = self.scoreboard.scoreboard().await?;
        let now = Utc::now();

        let completed: Vec<&Event> = scoreboard
            .events()
            .iter()
            .filter(|event| event.is_complete(now))
            .collect();

        if completed.is_empty() {
            debug!("No completed events this sweep");
            return Ok(0);
        }

        let mut sent = 0;
        for guild_id in &self.guild_ids {
            match self.notify_guild(*guild_id, &completed).await {
                Ok(count) => sent += count,
                Err(e) => {
                    error!(guild_id, error = %e, "Guild notification failed");
                }
            }
        }

        info!(completed = completed.len(), sent, "Completed-event sweep done");
        Ok(sent)
    }

    async fn notify_guild(&self, guild_id: i64, completed: &[&Event]) -> CaddieResult<usize> {
        let Some(config) = self.repository.get(guild_id).await? else {
            return Ok(0);
        };
        if !config.subscribed() {
            return Ok(0);
        }
        let Some(channel) = *config.notification_channel() else {
            return Ok(0);
        };

        let mut sent = 0;
        for event in completed {
            let featured = config
                .tracked_players()
                .iter()
                .any(|name| event.features_player(name));
            if !featured {
                continue;
            }

            let event_key = event.id().to_string();
            if config.notified(&event_key) {
                continue;
            }

            // Send before recording; a failed send is retried next sweep.
            let leaderboard = Leaderboard::from_event(event);
            let embed = completion_embed(event, leaderboard.as_ref());
            self.sink.send(OutboundMessage::new(channel, vec![embed])).await?;
            self.repository.record_notification(guild_id, &event_key).await?;

            info!(guild_id, event = %event.name(), "Sent completion notification");
            sent += 1;
        }

        Ok(sent)
    }
}
