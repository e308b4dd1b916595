//! Query response caching with a max-age window.
//!
//! This crate provides caching infrastructure for remote lookup results,
//! keeping calls to paid APIs to a minimum.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheEntry, QueryCache, QueryCacheConfig, QueryCacheConfigBuilder};
