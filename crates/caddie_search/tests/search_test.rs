//! Tests for the cached search client.

use caddie_search::{ImageSearchResponse, SearchClient, SearchCredentials, WebSearchResponse};
use serde_json::json;

fn image_payload() -> serde_json::Value {
    json!({
        "items": [
            {
                "kind": "customsearch#result",
                "title": "The Open Championship",
                "link": "https://upload.wikimedia.org/wikipedia/commons/open.jpg",
                "image": {
                    "height": 768,
                    "width": 1024,
                    "contextLink": "https://en.wikipedia.org/wiki/The_Open_Championship",
                    "thumbnailLink": "https://encrypted-tbn0.example.com/images?q=open",
                    "thumbnailHeight": 112,
                    "thumbnailWidth": 150
                }
            }
        ]
    })
}

fn web_payload() -> serde_json::Value {
    json!({
        "items": [
            {
                "title": "Rory McIlroy - Wikipedia",
                "link": "https://en.wikipedia.org/wiki/Rory_McIlroy",
                "snippet": "Rory McIlroy is a professional golfer from Northern Ireland.",
                "pagemap": {
                    "metatags": [
                        {
                            "og:image": "https://upload.wikimedia.org/wikipedia/commons/rory.jpg",
                            "og:title": "Rory McIlroy - Wikipedia"
                        }
                    ]
                }
            }
        ]
    })
}

#[test]
fn test_image_response_shape() {
    let response: ImageSearchResponse =
        serde_json::from_value(image_payload()).expect("image response should parse");

    let item = response.items().first().expect("one item");
    assert_eq!(item.link(), "https://upload.wikimedia.org/wikipedia/commons/open.jpg");
    let info = item.image().as_ref().expect("image info");
    assert_eq!(*info.width(), 1024);
}

#[test]
fn test_web_response_shape() {
    let response: WebSearchResponse =
        serde_json::from_value(web_payload()).expect("web response should parse");

    let item = response.items().first().expect("one item");
    assert!(item.snippet().contains("Northern Ireland"));
    let metatags = &item.pagemap().as_ref().expect("pagemap").metatags()[0];
    assert!(metatags.image().as_deref().is_some_and(|url| url.contains("rory")));
}

#[test]
fn test_zero_hit_response_has_no_items() {
    // The API omits `items` entirely for queries with no results.
    let response: WebSearchResponse =
        serde_json::from_value(json!({"kind": "customsearch#search"}))
            .expect("zero-hit response should parse");
    assert!(response.items().is_empty());
}

#[tokio::test]
async fn test_cached_image_lookup_skips_the_network() {
    // An unroutable endpoint: any cache miss would error out.
    let client = SearchClient::new(SearchCredentials::new("test-engine", "test-key"))
        .with_url("http://127.0.0.1:9/customsearch/v1");
    client.cache().store("image:The Open", image_payload());

    let item = client
        .first_image("The Open")
        .await
        .expect("cached lookup should not touch the network")
        .expect("cached payload has an item");
    assert_eq!(item.title(), "The Open Championship");
}

#[tokio::test]
async fn test_cached_web_lookup_skips_the_network() {
    let client = SearchClient::new(SearchCredentials::new("test-engine", "test-key"))
        .with_url("http://127.0.0.1:9/customsearch/v1");
    client
        .cache()
        .store("web:site:en.wikipedia.org Rory McIlroy Golf", web_payload());

    let item = client
        .first_web_result("site:en.wikipedia.org Rory McIlroy Golf")
        .await
        .expect("cached lookup should not touch the network")
        .expect("cached payload has an item");
    assert!(item.snippet().contains("golfer"));
}

#[tokio::test]
async fn test_uncached_lookup_fails_without_a_reachable_endpoint() {
    let client = SearchClient::new(SearchCredentials::new("test-engine", "test-key"))
        .with_url("http://127.0.0.1:9/customsearch/v1");

    assert!(client.first_image("The Open").await.is_err());
}

#[tokio::test]
#[ignore = "integration test, requires GOOGLE_SEARCH_ID and GOOGLE_SEARCH_KEY"]
async fn test_live_first_image() {
    dotenvy::dotenv().ok();
    let credentials = SearchCredentials::from_env().expect("search credentials in environment");

    let client = SearchClient::new(credentials);
    let image = client
        .first_image("The Open")
        .await
        .expect("live image search")
        .expect("live image result");
    assert!(!image.link().is_empty());
}

#[tokio::test]
#[ignore = "integration test, requires GOOGLE_SEARCH_ID and GOOGLE_SEARCH_KEY"]
async fn test_live_first_web_result() {
    dotenvy::dotenv().ok();
    let credentials = SearchCredentials::from_env().expect("search credentials in environment");

    let client = SearchClient::new(credentials);
    let result = client
        .first_web_result("site:en.wikipedia.org Rory McIlroy Golf")
        .await
        .expect("live web search")
        .expect("live web result");
    assert!(!result.snippet().is_empty());

    let null_result = client
        .first_web_result("site:en.wikipedia.org notarealperson McIlroy Golf")
        .await
        .expect("live web search");
    assert!(null_result.is_none());
}
