//! Grouping raw linescores into per-round scorecards.

use crate::models::Linescore;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single hole result within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Hole {
    /// Hole number, 1-based in playing order.
    number: u32,
    /// Strokes taken on the hole.
    score: i32,
}

/// Per-hole scores for one completed or in-progress round.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct Scorecard {
    holes: Vec<Hole>,
}

/// A player's rounds played so far in an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct Rounds {
    scorecards: Vec<Scorecard>,
}

/// Group a player's raw linescores into per-round scorecards.
///
/// A round counts only when its total `value` is present and non-zero;
/// the upstream feed pads future rounds with empty entries. Holes are
/// numbered from 1 in upstream order.
pub fn rounds_from_linescores(linescores: &[Linescore]) -> Rounds {
    let scorecards = linescores
        .iter()
        .filter(|round| round.value().is_some_and(|value| value != 0.0))
        .map(|round| {
            let holes = round
                .linescores()
                .iter()
                .enumerate()
                .map(|(index, hole)| Hole {
                    number: index as u32 + 1,
                    score: hole.value().unwrap_or(0.0) as i32,
                })
                .collect();
            Scorecard { holes }
        })
        .collect();

    Rounds { scorecards }
}

/// The round the field has reached: the largest number of scorecards
/// recorded by any player, or 0 for an empty field.
pub fn current_round_number(all_rounds: &[Rounds]) -> u32 {
    all_rounds
        .iter()
        .map(|rounds| rounds.scorecards().len() as u32)
        .max()
        .unwrap_or(0)
}
