//! Structured chat message types and embed construction.

use caddie_scoreboard::{CalendarEntry, CalendarState, Event, Leaderboard};
use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Accent color for embeds (emerald).
pub const EMBED_COLOR: u32 = 0x50C878;

/// Thumbnail shown when no event imagery is available.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/1/17/Ballybunion_Golf_Club_-_10th_hole.jpg/1024px-Ballybunion_Golf_Club_-_10th_hole.jpg";

/// One name/value field within an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

impl EmbedField {
    /// Create a field.
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// A structured embed handed to the chat platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatEmbed {
    title: String,
    #[builder(default)]
    url: Option<String>,
    #[builder(default)]
    description: Option<String>,
    #[builder(default = "EMBED_COLOR")]
    color: u32,
    #[builder(default)]
    thumbnail: Option<String>,
    #[builder(default)]
    fields: Vec<EmbedField>,
}

impl ChatEmbed {
    /// Start building an embed.
    pub fn builder() -> ChatEmbedBuilder {
        ChatEmbedBuilder::default()
    }
}

/// An outbound message addressed to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OutboundMessage {
    channel_id: i64,
    embeds: Vec<ChatEmbed>,
}

impl OutboundMessage {
    /// Create a message for a channel.
    pub fn new(channel_id: i64, embeds: Vec<ChatEmbed>) -> Self {
        Self { channel_id, embeds }
    }
}

fn the_prefix() -> &'static Regex {
    static THE_PREFIX: OnceLock<Regex> = OnceLock::new();
    THE_PREFIX.get_or_init(|| Regex::new(r"(?i)^the\b").expect("static pattern compiles"))
}

/// Prefix a tournament name with "The " unless it already starts with it.
pub fn normalize_tournament_name(name: &str) -> String {
    if the_prefix().is_match(name) {
        name.to_string()
    } else {
        format!("The {}", name)
    }
}

/// Build the leaderboard embed for one event.
pub fn leaderboard_embed(leaderboard: &Leaderboard) -> ChatEmbed {
    let name = normalize_tournament_name(leaderboard.event_name());
    let round = leaderboard.current_round();

    let fields = leaderboard
        .standings()
        .iter()
        .map(|standing| {
            EmbedField::new(
                format!("🏌️ {}", standing.player_name()),
                format!("{} through {} holes.", standing.score(), standing.through()),
                false,
            )
        })
        .collect();

    ChatEmbed {
        title: format!("'{}' Leaderboard - Round {}", name, round),
        url: leaderboard.event_url().clone(),
        description: Some(format!(
            "The Top {} players currently leading '{}' in round number {}.",
            Leaderboard::TOP_N,
            name,
            round
        )),
        color: EMBED_COLOR,
        thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
        fields,
    }
}

/// Build the season schedule embed for one league.
pub fn calendar_embed(league_name: &str, entries: &[CalendarEntry]) -> ChatEmbed {
    let fields = entries
        .iter()
        .map(|entry| {
            let value = match entry.state() {
                CalendarState::InProgress => "⛳ Currently in progress!".to_string(),
                CalendarState::Upcoming => {
                    format!("Starts on {}.", entry.start_date().format("%d/%m/%Y"))
                }
                CalendarState::Finished => {
                    format!("Finished on {}.", entry.end_date().format("%d/%m/%Y"))
                }
            };
            EmbedField::new(entry.label().clone(), value, false)
        })
        .collect();

    ChatEmbed {
        title: format!("{} Schedule", league_name),
        url: None,
        description: Some(format!("Events on the {} calendar.", league_name)),
        color: EMBED_COLOR,
        thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
        fields,
    }
}

/// Build the completed-event notification embed.
pub fn completion_embed(event: &Event, leaderboard: Option<&Leaderboard>) -> ChatEmbed {
    let name = normalize_tournament_name(event.name());

    let fields = leaderboard
        .map(|leaderboard| {
            leaderboard
                .standings()
                .iter()
                .map(|standing| {
                    EmbedField::new(
                        format!("🏌️ {}", standing.player_name()),
                        format!("Finished at {}.", standing.score()),
                        false,
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    ChatEmbed {
        title: format!("'{}' has finished!", name),
        url: event.links().first().map(|link| link.href().clone()),
        description: Some(format!("Final top {} for '{}'.", Leaderboard::TOP_N, name)),
        color: EMBED_COLOR,
        thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names_without_the_prefix() {
        assert_eq!(
            normalize_tournament_name("Barracuda Championship"),
            "The Barracuda Championship"
        );
        assert_eq!(normalize_tournament_name("The Open"), "The Open");
        assert_eq!(normalize_tournament_name("the open"), "the open");
    }

    #[test]
    fn embed_builder_fills_defaults() {
        let embed = ChatEmbed::builder()
            .title("'The Open' Leaderboard - Round 2")
            .build()
            .expect("title is set");

        assert_eq!(*embed.color(), EMBED_COLOR);
        assert!(embed.fields().is_empty());
        assert!(embed.url().is_none());
    }
}
