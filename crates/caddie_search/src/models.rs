//! Serde models for custom-search API responses.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Image search response document.
///
/// Zero-hit queries omit the `items` field entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ImageSearchResponse {
    #[serde(default)]
    items: Vec<ImageItem>,
}

/// One image search result.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ImageItem {
    kind: String,
    title: String,
    link: String,
    #[serde(default)]
    image: Option<ImageInfo>,
}

/// Dimensions and context for an image result.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    height: u32,
    width: u32,
    context_link: String,
    thumbnail_link: String,
    thumbnail_height: u32,
    thumbnail_width: u32,
}

/// Web page search response document.
///
/// Zero-hit queries omit the `items` field entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct WebSearchResponse {
    #[serde(default)]
    items: Vec<WebItem>,
}

/// One web page search result.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct WebItem {
    title: String,
    link: String,
    snippet: String,
    #[serde(default)]
    pagemap: Option<PageMap>,
}

/// Structured page metadata attached to a web result.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct PageMap {
    #[serde(default)]
    metatags: Vec<MetaTags>,
}

/// Open Graph metatags extracted from a result page.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MetaTags {
    /// Page image URL.
    #[serde(rename = "og:image", default)]
    image: Option<String>,
    /// Page title.
    #[serde(rename = "og:title", default)]
    title: Option<String>,
    /// Page description.
    #[serde(rename = "og:description", default)]
    description: Option<String>,
}
