//! Custom-search integration for Caddie.
//!
//! Simple wrapper around a paid custom-search API with two read-only
//! lookups, image and web page. Responses are cached by query string so
//! the API is used a minimal amount.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod models;

pub use client::{SEARCH_URL, SearchClient, SearchCredentials};
pub use models::{
    ImageInfo, ImageItem, ImageSearchResponse, MetaTags, PageMap, WebItem, WebSearchResponse,
};
