//! Cached custom-search client.

use crate::models::{ImageItem, ImageSearchResponse, WebItem, WebSearchResponse};
use caddie_cache::QueryCache;
use caddie_error::{CaddieResult, HttpError, SearchError, SearchErrorKind};
use derive_getters::Getters;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Custom search endpoint.
pub const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Credentials for the search collaborator.
///
/// Wiring treats an absent credential pair as an absent collaborator, so
/// the bot runs without search rather than failing at startup.
#[derive(Debug, Clone, Getters)]
pub struct SearchCredentials {
    engine_id: String,
    api_key: String,
}

impl SearchCredentials {
    /// Create credentials from explicit values.
    pub fn new(engine_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Read credentials from `GOOGLE_SEARCH_ID` and `GOOGLE_SEARCH_KEY`.
    ///
    /// Returns None when either variable is unset.
    pub fn from_env() -> Option<Self> {
        let engine_id = std::env::var("GOOGLE_SEARCH_ID").ok()?;
        let api_key = std::env::var("GOOGLE_SEARCH_KEY").ok()?;
        Some(Self::new(engine_id, api_key))
    }
}

/// Client for the custom-search API.
///
/// Both lookups run through one shared [`QueryCache`] under type-scoped
/// keys, so a repeated query inside the max-age window never reaches the
/// paid API. Remote calls are fire-and-forget with no retry; a failure
/// propagates to the caller.
pub struct SearchClient {
    http: reqwest::Client,
    credentials: SearchCredentials,
    cache: Arc<QueryCache>,
    url: String,
}

impl SearchClient {
    /// Create a client with a fresh default cache.
    pub fn new(credentials: SearchCredentials) -> Self {
        Self::with_cache(credentials, Arc::new(QueryCache::default()))
    }

    /// Create a client sharing an existing cache.
    pub fn with_cache(credentials: SearchCredentials, cache: Arc<QueryCache>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            cache,
            url: SEARCH_URL.to_string(),
        }
    }

    /// Point the client at a custom endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The cache guarding this client's lookups.
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Look up the first image result for a query.
    #[instrument(skip(self))]
    pub async fn first_image(&self, query: &str) -> CaddieResult<Option<ImageItem>> {
        let key = format!("image:{}", query);
        let payload = self
            .cached_lookup(&key, &[("q", query), ("searchType", "image")])
            .await?;

        let response: ImageSearchResponse = serde_json::from_value(payload).map_err(|e| {
            SearchError::new(SearchErrorKind::ResponseParsing(format!(
                "image search: {}",
                e
            )))
        })?;

        Ok(response.items().first().cloned())
    }

    /// Look up the first web page result for a query.
    ///
    /// Zero-hit queries come back as None.
    #[instrument(skip(self))]
    pub async fn first_web_result(&self, query: &str) -> CaddieResult<Option<WebItem>> {
        let key = format!("web:{}", query);
        let payload = self.cached_lookup(&key, &[("q", query)]).await?;

        let response: WebSearchResponse = serde_json::from_value(payload).map_err(|e| {
            SearchError::new(SearchErrorKind::ResponseParsing(format!("web search: {}", e)))
        })?;

        Ok(response.items().first().cloned())
    }

    /// Serve a raw response payload from the cache, fetching and storing
    /// it on a miss.
    async fn cached_lookup(&self, key: &str, params: &[(&str, &str)]) -> CaddieResult<JsonValue> {
        if let Some(payload) = self.cache.lookup(key) {
            debug!(key, "Serving search response from cache");
            return Ok(payload);
        }

        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("cx", self.credentials.engine_id().as_str()),
                ("key", self.credentials.api_key().as_str()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                SearchError::new(SearchErrorKind::Api(format!("status {}", status))).into(),
            );
        }

        let payload: JsonValue = response
            .json()
            .await
            .map_err(|e| HttpError::new(format!("Search body read failed: {}", e)))?;

        info!(key, "Fetched search response, caching");
        self.cache.store(key, payload.clone());

        Ok(payload)
    }
}
