//! Query result cache implementation.

use chrono::{DateTime, Duration, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache entry holding an opaque response payload and its fetch time.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    payload: JsonValue,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create a new entry fetched now.
    pub fn new(payload: JsonValue) -> Self {
        Self {
            payload,
            fetched_at: Utc::now(),
        }
    }

    /// Create an entry with an explicit fetch time.
    ///
    /// Useful for seeding a cache from persisted state, or for tests that
    /// need to backdate entries past the max-age window.
    pub fn with_fetched_at(payload: JsonValue, fetched_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            fetched_at,
        }
    }

    /// Check whether this entry has aged past the given window.
    pub fn is_expired(&self, max_age: Duration) -> bool {
        Utc::now() - self.fetched_at >= max_age
    }
}

/// Configuration for the query cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct QueryCacheConfig {
    /// Maximum age for cached entries (days)
    #[serde(default = "default_max_age_days")]
    #[builder(default = "default_max_age_days()")]
    max_age_days: i64,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_max_age_days() -> i64 {
    10
}

fn default_enabled() -> bool {
    true
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            max_age_days: default_max_age_days(),
            enabled: default_enabled(),
        }
    }
}

impl QueryCacheConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> QueryCacheConfigBuilder {
        QueryCacheConfigBuilder::default()
    }

    /// The configured max age as a duration.
    pub fn max_age(&self) -> Duration {
        Duration::days(self.max_age_days)
    }
}

/// Cache for remote lookup results, keyed by query string.
///
/// A stored value is served only while its age is under the configured
/// maximum. Expired or absent entries are treated as misses. Nothing is
/// evicted: a stale entry simply sits unused until the same key is stored
/// again. The backing map is guarded so the polling task and interactive
/// handlers can share one cache.
///
/// # Example
///
/// ```
/// use caddie_cache::{QueryCache, QueryCacheConfig};
/// use serde_json::json;
///
/// let cache = QueryCache::new(QueryCacheConfig::default());
///
/// cache.store("image:The Open", json!({"items": []}));
///
/// if let Some(payload) = cache.lookup("image:The Open") {
///     println!("Cached: {:?}", payload);
/// }
/// ```
pub struct QueryCache {
    config: QueryCacheConfig,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl QueryCache {
    /// Create a new query cache with configuration.
    pub fn new(config: QueryCacheConfig) -> Self {
        tracing::debug!(
            max_age_days = config.max_age_days,
            enabled = config.enabled,
            "Creating new QueryCache"
        );
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The configuration this cache was created with.
    pub fn config(&self) -> &QueryCacheConfig {
        &self.config
    }

    /// Store a response payload under a query key, fetched now.
    ///
    /// Overwrites any previous entry for the same key. A no-op when the
    /// cache is disabled.
    #[tracing::instrument(skip(self, payload), fields(key))]
    pub fn store(&self, key: &str, payload: JsonValue) {
        self.insert(key, CacheEntry::new(payload));
    }

    /// Insert a prepared entry under a query key.
    pub fn insert(&self, key: &str, entry: CacheEntry) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping store");
            return;
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        tracing::debug!(
            replaced = entries.contains_key(key),
            fetched_at = %entry.fetched_at,
            "Stored entry in cache"
        );
        entries.insert(key.to_string(), entry);
    }

    /// Look up a cached response payload.
    ///
    /// Returns None if:
    /// - No entry exists for the key
    /// - The entry is older than the max-age window
    /// - The cache is disabled
    #[tracing::instrument(skip(self), fields(key))]
    pub fn lookup(&self, key: &str) -> Option<JsonValue> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(key)?;
        if entry.is_expired(self.config.max_age()) {
            tracing::debug!(fetched_at = %entry.fetched_at, "Cache entry expired");
            return None;
        }

        tracing::debug!("Cache hit");
        Some(entry.payload.clone())
    }

    /// Get number of cached entries, live or stale.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(QueryCacheConfig::default())
    }
}
