//! Tests for the query cache max-age window.

use caddie_cache::{CacheEntry, QueryCache, QueryCacheConfig};
use chrono::{Duration, Utc};
use serde_json::json;

#[test]
fn test_config_defaults() {
    let config = QueryCacheConfig::default();
    assert_eq!(*config.max_age_days(), 10);
    assert!(*config.enabled());
}

#[test]
fn test_config_builder() {
    let config = QueryCacheConfig::builder()
        .max_age_days(3)
        .enabled(false)
        .build()
        .expect("Failed to build config");

    assert_eq!(*config.max_age_days(), 3);
    assert!(!*config.enabled());
}

#[test]
fn test_lookup_within_window() {
    let cache = QueryCache::default();
    cache.store("test search query", json!({"items": [{"title": "hit"}]}));

    let payload = cache.lookup("test search query").expect("expected a hit");
    assert_eq!(payload["items"][0]["title"], "hit");
}

#[test]
fn test_lookup_misses_once_expired() {
    let cache = QueryCache::default();
    let stale = CacheEntry::with_fetched_at(json!({"items": []}), Utc::now() - Duration::days(20));
    cache.insert("test query 2", stale);

    // Item too old and needs to be refreshed.
    assert!(cache.lookup("test query 2").is_none());
    // The stale entry stays in the map until overwritten.
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_lookup_misses_when_absent() {
    let cache = QueryCache::default();
    assert!(cache.lookup("never stored").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_store_overwrites_stale_entry() {
    let cache = QueryCache::default();
    let stale = CacheEntry::with_fetched_at(json!({"version": 1}), Utc::now() - Duration::days(20));
    cache.insert("query", stale);
    assert!(cache.lookup("query").is_none());

    cache.store("query", json!({"version": 2}));
    let payload = cache.lookup("query").expect("refreshed entry should hit");
    assert_eq!(payload["version"], 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_disabled_cache_never_hits() {
    let config = QueryCacheConfig::builder()
        .max_age_days(10)
        .enabled(false)
        .build()
        .expect("Failed to build config");
    let cache = QueryCache::new(config);

    cache.store("query", json!({"items": []}));
    assert!(cache.lookup("query").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_entry_expiry_boundary() {
    let fresh = CacheEntry::new(json!(1));
    assert!(!fresh.is_expired(Duration::days(10)));

    let old = CacheEntry::with_fetched_at(json!(1), Utc::now() - Duration::days(10));
    assert!(old.is_expired(Duration::days(10)));
}
