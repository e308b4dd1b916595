//! Leaderboard computation for a running event.

use crate::models::{Event, Score};
use crate::rounds::{Rounds, current_round_number, rounds_from_linescores};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One player's position on a leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Standing {
    player_name: String,
    player_flag: String,
    score: Score,
    /// Holes completed in the current round; 0 when the player has not
    /// started it.
    through: u32,
}

/// Top standings for one event.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Leaderboard {
    event_name: String,
    event_url: Option<String>,
    current_round: u32,
    standings: Vec<Standing>,
}

impl Leaderboard {
    /// Number of leading players reported per event.
    pub const TOP_N: usize = 5;

    /// Build the top-five leaderboard for an event.
    ///
    /// Uses the event's first competition; stroke-play events carry
    /// exactly one. Returns None for an event with no competitions.
    pub fn from_event(event: &Event) -> Option<Self> {
        let competition = event.competitions().first()?;
        let players = competition.players();

        let all_rounds: Vec<Rounds> = players
            .iter()
            .map(|player| rounds_from_linescores(player.linescores()))
            .collect();
        let current_round = current_round_number(&all_rounds);

        let mut standings: Vec<Standing> = players
            .iter()
            .zip(all_rounds.iter())
            .map(|(player, rounds)| {
                let through = match current_round {
                    0 => 0,
                    round => rounds
                        .scorecards()
                        .get(round as usize - 1)
                        .map(|scorecard| scorecard.holes().len() as u32)
                        .unwrap_or(0),
                };
                Standing {
                    player_name: player.details().full_name().clone(),
                    player_flag: player.details().flag().href().clone(),
                    score: *player.score(),
                    through,
                }
            })
            .collect();

        standings.sort_by_key(|standing| *standing.score());
        standings.truncate(Self::TOP_N);

        debug!(
            event = %event.name(),
            current_round,
            standings = standings.len(),
            "Computed leaderboard"
        );

        Some(Self {
            event_name: event.name().clone(),
            event_url: event.links().first().map(|link| link.href().clone()),
            current_round,
            standings,
        })
    }
}
