//! Season calendar classification.

use crate::models::League;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where a calendar event sits relative to a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarState {
    /// The event has started and not yet ended.
    InProgress,
    /// The event starts in the future.
    Upcoming,
    /// The event has ended.
    Finished,
}

/// A classified season calendar entry.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct CalendarEntry {
    label: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    state: CalendarState,
}

impl League {
    /// Classify this league's calendar against the given clock.
    ///
    /// Entries come back in upstream (season) order.
    pub fn calendar_entries(&self, now: DateTime<Utc>) -> Vec<CalendarEntry> {
        self.calendar()
            .iter()
            .map(|event| {
                let state = if *event.end_date() < now {
                    CalendarState::Finished
                } else if *event.start_date() > now {
                    CalendarState::Upcoming
                } else {
                    CalendarState::InProgress
                };
                CalendarEntry {
                    label: event.label().clone(),
                    start_date: *event.start_date(),
                    end_date: *event.end_date(),
                    state,
                }
            })
            .collect()
    }
}
