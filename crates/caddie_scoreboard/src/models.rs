//! Serde models for the upstream scoreboard document.
//!
//! Field names follow the upstream camelCase JSON; ids arrive as either
//! numbers or numeric strings, and player scores as either numbers or
//! relative-to-par strings, so those fields carry custom deserializers.

use caddie_error::{CaddieResult, JsonError};
use chrono::{DateTime, NaiveDateTime, Utc};
use derive_getters::Getters;
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

/// Top-level scoreboard document: leagues plus currently running events.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Scoreboard {
    leagues: Vec<League>,
    events: Vec<Event>,
}

impl Scoreboard {
    /// Parse a raw scoreboard document.
    ///
    /// Missing or malformed upstream fields fail validation here and
    /// surface as a generic error to the caller.
    pub fn parse(raw: &str) -> CaddieResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| JsonError::new(format!("Invalid scoreboard document: {}", e)).into())
    }
}

/// Golf league, e.g. the PGA Tour.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct League {
    #[serde(deserialize_with = "flexible_i64")]
    id: i64,
    name: String,
    abbreviation: String,
    #[serde(default)]
    calendar: Vec<CalendarEvent>,
    #[serde(default)]
    logos: Vec<Logo>,
}

/// One entry in a league's season calendar.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(deserialize_with = "flexible_i64")]
    id: i64,
    label: String,
    #[serde(deserialize_with = "flexible_datetime")]
    start_date: DateTime<Utc>,
    #[serde(deserialize_with = "flexible_datetime")]
    end_date: DateTime<Utc>,
    event: EventLink,
}

/// Reference to the full event resource.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct EventLink {
    #[serde(rename = "$ref")]
    href: String,
}

/// League logo asset.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Logo {
    href: String,
    width: u32,
    height: u32,
}

/// A running tournament.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "flexible_i64")]
    id: i64,
    name: String,
    short_name: String,
    #[serde(rename = "date", deserialize_with = "flexible_datetime")]
    start_date: DateTime<Utc>,
    #[serde(deserialize_with = "flexible_datetime")]
    end_date: DateTime<Utc>,
    #[serde(default)]
    competitions: Vec<Competition>,
    #[serde(default)]
    links: Vec<Link>,
}

impl Event {
    /// Whether the event features the named player, matched
    /// case-insensitively on full name.
    pub fn features_player(&self, name: &str) -> bool {
        self.competitions.iter().any(|competition| {
            competition
                .players()
                .iter()
                .any(|player| player.details().full_name().eq_ignore_ascii_case(name))
        })
    }

    /// Whether the event has finished relative to the given clock.
    pub fn is_complete(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }
}

/// Outbound hyperlink attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Link {
    href: String,
}

/// A competition within an event. Stroke-play events carry one.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Competition {
    #[serde(deserialize_with = "flexible_i64")]
    id: i64,
    #[serde(rename = "competitors")]
    players: Vec<Player>,
}

/// A player entry within a competition.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Player {
    #[serde(deserialize_with = "flexible_i64")]
    id: i64,
    #[serde(rename = "athlete")]
    details: PlayerProfile,
    score: Score,
    #[serde(default)]
    linescores: Vec<Linescore>,
}

/// Athlete profile data.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    full_name: String,
    short_name: String,
    flag: Flag,
}

/// National flag asset for a player.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Flag {
    href: String,
    #[serde(rename = "alt")]
    country: String,
}

/// A player's score relative to par.
///
/// The upstream feed emits either a JSON number or a string such as
/// `"+3"`, `"-5"` or `"E"` (even). All forms collapse to a signed
/// stroke count.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct Score(i32);

impl Score {
    /// Create a score from a signed stroke count.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Strokes relative to par.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawScore {
            Number(i64),
            Text(String),
        }

        match RawScore::deserialize(deserializer)? {
            RawScore::Number(n) => Ok(Score(n as i32)),
            RawScore::Text(s) => {
                let normalized = s.trim().replace('+', "").replace('E', "0");
                normalized
                    .parse::<i32>()
                    .map(Score)
                    .map_err(|_| DeError::custom(format!("invalid score value: {}", s)))
            }
        }
    }
}

/// Per-round linescore: a round total plus per-hole entries.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Default)]
pub struct Linescore {
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    linescores: Vec<HoleLinescore>,
}

/// Per-hole score entry within a round linescore.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, Default)]
pub struct HoleLinescore {
    #[serde(default)]
    value: Option<f64>,
}

/// Accept ids as either JSON numbers or numeric strings.
fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .parse::<i64>()
            .map_err(|_| DeError::custom(format!("invalid id value: {}", s))),
    }
}

/// Parse upstream timestamps.
///
/// Accepts formats:
/// - RFC 3339: `2023-07-20T07:00:00Z`
/// - Minute precision: `2023-07-20T07:00Z`
fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(without_z) = raw.strip_suffix('Z')
        && let Ok(dt) = NaiveDateTime::parse_from_str(without_z, "%Y-%m-%dT%H:%M")
    {
        return Ok(dt.and_utc());
    }

    Err(DeError::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_numbers_and_par_strings() {
        let parsed: Score = serde_json::from_str("4").expect("number score");
        assert_eq!(parsed.value(), 4);

        let parsed: Score = serde_json::from_str("\"+3\"").expect("over par score");
        assert_eq!(parsed.value(), 3);

        let parsed: Score = serde_json::from_str("\"-5\"").expect("under par score");
        assert_eq!(parsed.value(), -5);

        let parsed: Score = serde_json::from_str("\"E\"").expect("even score");
        assert_eq!(parsed.value(), 0);
    }

    #[test]
    fn score_rejects_garbage() {
        let result: Result<Score, _> = serde_json::from_str("\"birdie\"");
        assert!(result.is_err());
    }

    #[test]
    fn timestamps_accept_minute_precision() {
        let raw = r#"{"href": "https://example.com", "alt": "USA"}"#;
        let flag: Flag = serde_json::from_str(raw).expect("flag");
        assert_eq!(flag.country(), "USA");

        let raw = r#"{
            "id": "401465533",
            "label": "The Open",
            "startDate": "2023-07-20T07:00Z",
            "endDate": "2023-07-23T23:00:00Z",
            "event": {"$ref": "http://sports.example.com/events/401465533"}
        }"#;
        let entry: CalendarEvent = serde_json::from_str(raw).expect("calendar event");
        assert_eq!(*entry.id(), 401465533);
        assert_eq!(entry.start_date().to_rfc3339(), "2023-07-20T07:00:00+00:00");
    }
}
