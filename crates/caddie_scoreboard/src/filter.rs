//! Event selection helpers.

use crate::models::Event;
use tracing::debug;

/// Compare an optional name filter against an event name.
///
/// An absent filter matches everything; otherwise the match is
/// case-insensitive equality.
pub fn match_event_name(filter: Option<&str>, name: &str) -> bool {
    match filter {
        None => true,
        Some(filter) => filter.eq_ignore_ascii_case(name),
    }
}

/// Keep events featuring at least one tracked player.
///
/// An empty tracked list matches no events.
pub fn filter_by_players<'a>(events: &'a [Event], tracked: &[String]) -> Vec<&'a Event> {
    let matched: Vec<&Event> = events
        .iter()
        .filter(|event| tracked.iter().any(|name| event.features_player(name)))
        .collect();

    debug!(
        total = events.len(),
        matched = matched.len(),
        tracked = tracked.len(),
        "Filtered events by tracked players"
    );

    matched
}
