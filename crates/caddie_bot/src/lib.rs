//! Bot integration layer for Caddie.
//!
//! This crate ties the scoreboard, search, and storage crates into the
//! shapes the chat platform works with:
//! - **messages**: structured chat embeds and the outbound message type
//! - **commands**: slash-command-style operations over injected
//!   collaborators
//! - **notify**: the periodic completed-event poller and the `ChatSink`
//!   outbound contract
//! - **config**: the explicit configuration object, with nullable
//!   collaborator references for optional integrations
//! - **telemetry**: console tracing initialization

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod config;
mod messages;
mod notify;
mod telemetry;

pub use commands::Commands;
pub use config::{BotConfig, ScoreboardConfig, SearchSettings};
pub use messages::{
    ChatEmbed, ChatEmbedBuilder, EMBED_COLOR, EmbedField, OutboundMessage, PLACEHOLDER_THUMBNAIL,
    calendar_embed, completion_embed, leaderboard_embed, normalize_tournament_name,
};
pub use notify::{ChatSink, Notifier, NotifierConfig, NotifierConfigBuilder, NotifierMessage};
pub use telemetry::init_console_telemetry;
