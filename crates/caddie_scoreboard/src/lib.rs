//! Scoreboard integration for Caddie.
//!
//! This crate wraps the public golf scoreboard API and the transformations
//! the bot runs over its data:
//! - **models**: serde models mirroring the upstream JSON document
//!   (leagues, calendar, events, competitions, players, linescores)
//! - **client**: the `ScoreboardProvider` contract and its `reqwest`
//!   implementation
//! - **rounds**: grouping raw linescores into per-round scorecards
//! - **leaderboard**: top-five standings for a running event
//! - **calendar**: classifying season calendar entries against a clock
//! - **filter**: event selection by name or by tracked players

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod calendar;
mod client;
mod filter;
mod leaderboard;
mod models;
mod rounds;

pub use calendar::{CalendarEntry, CalendarState};
pub use client::{SCOREBOARD_URL, ScoreboardClient, ScoreboardProvider};
pub use filter::{filter_by_players, match_event_name};
pub use leaderboard::{Leaderboard, Standing};
pub use models::{
    CalendarEvent, Competition, Event, EventLink, Flag, HoleLinescore, League, Linescore, Link,
    Logo, Player, PlayerProfile, Score, Scoreboard,
};
pub use rounds::{Hole, Rounds, Scorecard, current_round_number, rounds_from_linescores};
