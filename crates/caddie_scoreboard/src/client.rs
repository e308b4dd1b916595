//! Scoreboard provider contract and HTTP client.

use crate::models::Scoreboard;
use caddie_error::{CaddieResult, HttpError, JsonError};
use tracing::{info, instrument};

/// Public scoreboard endpoint for the PGA Tour.
///
/// Thank you, ESPN, for giving us this data!
pub const SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/golf/pga/scoreboard";

/// Contract for the scoreboard collaborator.
///
/// The interactive commands and the notification poller share this read
/// path; tests substitute a fixture-backed implementation.
#[async_trait::async_trait]
pub trait ScoreboardProvider: Send + Sync {
    /// Fetch the current scoreboard document.
    async fn scoreboard(&self) -> CaddieResult<Scoreboard>;
}

/// HTTP scoreboard client.
///
/// Fire-and-forget: no retry policy, a failed request surfaces as an
/// error to the caller.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    http: reqwest::Client,
    url: String,
}

impl ScoreboardClient {
    /// Create a client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_url(SCOREBOARD_URL)
    }

    /// Create a client against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// The endpoint this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for ScoreboardClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScoreboardProvider for ScoreboardClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn scoreboard(&self) -> CaddieResult<Scoreboard> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Scoreboard request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("Scoreboard request returned {}", status)).into());
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| HttpError::new(format!("Scoreboard body read failed: {}", e)))?;

        let scoreboard: Scoreboard = serde_json::from_value(payload)
            .map_err(|e| JsonError::new(format!("Invalid scoreboard document: {}", e)))?;

        info!(
            leagues = scoreboard.leagues().len(),
            events = scoreboard.events().len(),
            "Fetched scoreboard"
        );

        Ok(scoreboard)
    }
}
