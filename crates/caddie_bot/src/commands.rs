//! Slash-command-style operations over injected collaborators.

use crate::messages::{ChatEmbed, calendar_embed, leaderboard_embed};
use caddie_error::CaddieResult;
use caddie_scoreboard::{Event, Leaderboard, ScoreboardProvider, filter_by_players, match_event_name};
use caddie_search::{ImageItem, SearchClient, WebItem};
use caddie_storage::{DocumentStore, GuildConfigRepository};
use chrono::{DateTime, Utc};
use tracing::{error, instrument};

/// Command layer for interactive requests.
///
/// Every collaborator is injected: the scoreboard provider, the guild
/// configuration repository, and an optional search client (absent when
/// no credentials were wired).
pub struct Commands<P: ScoreboardProvider, S: DocumentStore> {
    scoreboard: P,
    repository: GuildConfigRepository<S>,
    search: Option<SearchClient>,
}

impl<P: ScoreboardProvider, S: DocumentStore> Commands<P, S> {
    /// Create the command layer.
    pub fn new(
        scoreboard: P,
        repository: GuildConfigRepository<S>,
        search: Option<SearchClient>,
    ) -> Self {
        Self {
            scoreboard,
            repository,
            search,
        }
    }

    /// Currently running events, optionally filtered by name.
    ///
    /// The name match is case-insensitive; no filter returns every event.
    #[instrument(skip(self))]
    pub async fn current_events(&self, event_name: Option<&str>) -> CaddieResult<Vec<Event>> {
        let scoreboard = self.scoreboard.scoreboard().await?;
        Ok(scoreboard
            .events()
            .iter()
            .filter(|event| match_event_name(event_name, event.name()))
            .cloned()
            .collect())
    }

    /// Currently running events featuring players the guild tracks.
    ///
    /// A guild with no configuration gets no events.
    #[instrument(skip(self))]
    pub async fn tracked_events(&self, guild_id: i64) -> CaddieResult<Vec<Event>> {
        let Some(config) = self.repository.get(guild_id).await? else {
            return Ok(Vec::new());
        };

        let scoreboard = self.scoreboard.scoreboard().await?;
        Ok(
            filter_by_players(scoreboard.events(), config.tracked_players())
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    /// Leaderboard embeds for running events, one per event with a
    /// competition.
    #[instrument(skip(self))]
    pub async fn leaderboards(&self, event_name: Option<&str>) -> CaddieResult<Vec<ChatEmbed>> {
        let events = self.current_events(event_name).await?;
        Ok(events
            .iter()
            .filter_map(Leaderboard::from_event)
            .map(|leaderboard| leaderboard_embed(&leaderboard))
            .collect())
    }

    /// Season schedule embeds, one per league.
    #[instrument(skip(self))]
    pub async fn upcoming_events(&self) -> CaddieResult<Vec<ChatEmbed>> {
        self.upcoming_events_at(Utc::now()).await
    }

    /// Season schedule embeds classified against an explicit clock.
    #[instrument(skip(self))]
    pub async fn upcoming_events_at(&self, now: DateTime<Utc>) -> CaddieResult<Vec<ChatEmbed>> {
        let scoreboard = self.scoreboard.scoreboard().await?;
        Ok(scoreboard
            .leagues()
            .iter()
            .map(|league| calendar_embed(league.name(), &league.calendar_entries(now)))
            .collect())
    }

    /// Add a player to the guild's tracked list.
    ///
    /// Store-write failures are converted into a user-facing failure
    /// string here rather than propagated.
    #[instrument(skip(self))]
    pub async fn track_player(&self, guild_id: i64, name: &str) -> String {
        match self.repository.add_tracked_player(guild_id, name).await {
            Ok(config) => format!(
                "Now tracking {}. {} players tracked.",
                name,
                config.tracked_players().len()
            ),
            Err(e) => {
                error!(guild_id, player = name, error = %e, "Failed to save tracked player");
                format!("Could not save {} to the tracked players.", name)
            }
        }
    }

    /// Remove a player from the guild's tracked list.
    #[instrument(skip(self))]
    pub async fn untrack_player(&self, guild_id: i64, name: &str) -> String {
        match self.repository.remove_tracked_player(guild_id, name).await {
            Ok(config) => format!(
                "No longer tracking {}. {} players tracked.",
                name,
                config.tracked_players().len()
            ),
            Err(e) => {
                error!(guild_id, player = name, error = %e, "Failed to remove tracked player");
                format!("Could not remove {} from the tracked players.", name)
            }
        }
    }

    /// Update the guild's notification settings.
    #[instrument(skip(self))]
    pub async fn configure_notifications(
        &self,
        guild_id: i64,
        enabled: bool,
        channel: Option<i64>,
    ) -> String {
        match self
            .repository
            .set_notifications(guild_id, enabled, channel)
            .await
        {
            Ok(config) if config.subscribed() => {
                "Completed-event notifications are on.".to_string()
            }
            Ok(_) => "Completed-event notifications are off.".to_string(),
            Err(e) => {
                error!(guild_id, error = %e, "Failed to save notification settings");
                "Could not save the notification settings.".to_string()
            }
        }
    }

    /// First image result for a player or tournament name.
    ///
    /// Returns None when no search collaborator is wired.
    #[instrument(skip(self))]
    pub async fn player_image(&self, name: &str) -> CaddieResult<Option<ImageItem>> {
        match &self.search {
            Some(search) => search.first_image(name).await,
            None => Ok(None),
        }
    }

    /// First encyclopedia page for a player, with snippet and page
    /// metatags.
    #[instrument(skip(self))]
    pub async fn player_summary(&self, name: &str) -> CaddieResult<Option<WebItem>> {
        match &self.search {
            Some(search) => {
                let query = format!("site:en.wikipedia.org {} Golf", name);
                search.first_web_result(&query).await
            }
            None => Ok(None),
        }
    }
}
