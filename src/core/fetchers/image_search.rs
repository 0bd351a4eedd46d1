//! Flickr `flickr.photos.search` request building and payload extraction.

use serde::Deserialize;
use serde_json::Value;

use crate::core::models::{ImageEntry, ImageSearchEndpoint, SearchRequest, SearchTerm, SourceKind};

const SEARCH_METHOD: &str = "flickr.photos.search";
const PHOTO_EXTRAS: &str = "url_q,url_m,url_o";

pub fn build_image_search_request(
    term: &SearchTerm,
    endpoint: &ImageSearchEndpoint,
) -> SearchRequest {
    let encoded_term = urlencoding::encode(term.as_str());

    let url = format!(
        "{}?method={}&api_key={}&text={}&tags={}&extras={}&format=json&nojsoncallback=1&license={}&sort={}&parse_tags=1&per_page={}",
        endpoint.base_url,
        SEARCH_METHOD,
        urlencoding::encode(&endpoint.api_key),
        encoded_term,
        encoded_term,
        urlencoding::encode(PHOTO_EXTRAS),
        urlencoding::encode(&endpoint.license_filter),
        urlencoding::encode(&endpoint.sort_order),
        endpoint.per_page,
    );

    SearchRequest {
        source: SourceKind::Images,
        url,
    }
}

#[derive(Debug, Deserialize)]
struct FlickrPhoto {
    title: Option<String>,
    url_q: Option<String>,
    url_m: Option<String>,
    url_o: Option<String>,
}

impl FlickrPhoto {
    fn into_entry(self) -> Option<ImageEntry> {
        let display_url = self.url_q.clone().or_else(|| self.url_m.clone())?;
        let link_url = self
            .url_o
            .or(self.url_m)
            .or(self.url_q)
            .unwrap_or_else(|| display_url.clone());

        Some(ImageEntry::new(
            display_url,
            link_url,
            self.title.unwrap_or_default(),
        ))
    }
}

fn parse_photo(record: &Value) -> Option<ImageEntry> {
    match FlickrPhoto::deserialize(record) {
        Ok(photo) => photo.into_entry(),
        Err(e) => {
            log::debug!("[FLICKR] Skipping malformed photo record: {}", e);
            None
        }
    }
}

/// The message of a `stat: "fail"` body. Flickr answers an invalid key this
/// way with HTTP 200.
pub fn reported_api_failure(payload: &Value) -> Option<String> {
    if payload.get("stat").and_then(Value::as_str) != Some("fail") {
        return None;
    }

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message");
    Some(message.to_string())
}

/// Extracts up to `max_entries` entries in response order. Records that are
/// malformed or lack a displayable size are skipped individually.
pub fn extract_image_entries(payload: &Value, max_entries: usize) -> Vec<ImageEntry> {
    if let Some(message) = reported_api_failure(payload) {
        log::warn!("[FLICKR] API reported failure: {}", message);
        return Vec::new();
    }

    let Some(records) = payload
        .get("photos")
        .and_then(|photos| photos.get("photo"))
        .and_then(Value::as_array)
    else {
        log::warn!("[FLICKR] Payload has no photo list");
        return Vec::new();
    };

    records
        .iter()
        .filter_map(parse_photo)
        .take(max_entries)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_endpoint() -> ImageSearchEndpoint {
        ImageSearchEndpoint {
            base_url: "https://api.flickr.com/services/rest/".to_string(),
            api_key: "flickr-key".to_string(),
            license_filter: "2,3,4,5,6,9".to_string(),
            sort_order: "relevance".to_string(),
            per_page: 30,
        }
    }

    fn create_photo_payload(count: usize) -> Value {
        let photos: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "title": format!("photo {}", i),
                    "url_q": format!("https://live.staticflickr.com/q/{}.jpg", i),
                    "url_m": format!("https://live.staticflickr.com/m/{}.jpg", i),
                })
            })
            .collect();

        json!({"photos": {"page": 1, "photo": photos}, "stat": "ok"})
    }

    #[test]
    fn test_build_request_embeds_term_as_text_and_tags() {
        let term = SearchTerm::parse(Some("red panda")).unwrap();

        let request = build_image_search_request(&term, &create_test_endpoint());

        assert_eq!(request.source, SourceKind::Images);
        assert!(request.url.starts_with("https://api.flickr.com/services/rest/?method=flickr.photos.search"));
        assert!(request.url.contains("&text=red%20panda"));
        assert!(request.url.contains("&tags=red%20panda"));
        assert!(request.url.contains("&api_key=flickr-key"));
    }

    #[test]
    fn test_build_request_asks_for_json_with_filters() {
        let term = SearchTerm::parse(Some("cat")).unwrap();

        let request = build_image_search_request(&term, &create_test_endpoint());

        assert!(request.url.contains("&format=json&nojsoncallback=1"));
        assert!(request.url.contains("&license=2%2C3%2C4%2C5%2C6%2C9"));
        assert!(request.url.contains("&sort=relevance"));
        assert!(request.url.contains("&extras=url_q%2Curl_m%2Curl_o"));
        assert!(request.url.ends_with("&per_page=30"));
    }

    #[test]
    fn test_build_request_encodes_special_characters() {
        let term = SearchTerm::parse(Some("rock&roll?")).unwrap();

        let request = build_image_search_request(&term, &create_test_endpoint());

        assert!(request.url.contains("&text=rock%26roll%3F"));
    }

    #[test]
    fn test_extract_caps_entries_in_response_order() {
        let entries = extract_image_entries(&create_photo_payload(45), 30);

        assert_eq!(entries.len(), 30);
        assert_eq!(entries[0].title, "photo 0");
        assert_eq!(entries[29].title, "photo 29");
    }

    #[test]
    fn test_extract_short_list_renders_what_exists() {
        let entries = extract_image_entries(&create_photo_payload(4), 30);

        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_extract_prefers_original_size_for_link() {
        let payload = json!({"photos": {"photo": [{
            "title": "bridge",
            "url_q": "https://example.com/q.jpg",
            "url_m": "https://example.com/m.jpg",
            "url_o": "https://example.com/o.jpg"
        }]}});

        let entries = extract_image_entries(&payload, 30);

        assert_eq!(
            entries,
            vec![ImageEntry::new(
                "https://example.com/q.jpg".to_string(),
                "https://example.com/o.jpg".to_string(),
                "bridge".to_string(),
            )]
        );
    }

    #[test]
    fn test_extract_skips_photos_without_display_url() {
        let payload = json!({"photos": {"photo": [
            {"title": "no sizes"},
            {"title": "medium only", "url_m": "https://example.com/m.jpg"}
        ]}});

        let entries = extract_image_entries(&payload, 30);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_url, "https://example.com/m.jpg");
        assert_eq!(entries[0].link_url, "https://example.com/m.jpg");
    }

    #[test]
    fn test_extract_stat_fail_yields_nothing() {
        let payload = json!({"stat": "fail", "code": 100, "message": "Invalid API Key"});

        assert!(extract_image_entries(&payload, 30).is_empty());
        assert_eq!(
            reported_api_failure(&payload),
            Some("Invalid API Key".to_string())
        );
    }

    #[test]
    fn test_reported_api_failure_ignores_ok_payloads() {
        assert_eq!(reported_api_failure(&create_photo_payload(2)), None);
    }

    #[test]
    fn test_extract_skips_only_the_malformed_record() {
        let payload = json!({"photos": {"photo": [
            {"title": "ok", "url_q": "https://example.com/q1.jpg"},
            {"title": "bad", "url_q": 42}
        ]}, "stat": "ok"});

        let entries = extract_image_entries(&payload, 30);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "ok");
    }

    #[test]
    fn test_extract_null_title_keeps_the_photo() {
        let payload = json!({"photos": {"photo": [
            {"title": "ok", "url_q": "https://example.com/q1.jpg"},
            {"title": null, "url_q": "https://example.com/q2.jpg"}
        ]}, "stat": "ok"});

        let entries = extract_image_entries(&payload, 30);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title, "");
        assert_eq!(entries[1].display_url, "https://example.com/q2.jpg");
    }

    #[test]
    fn test_extract_unexpected_shape_yields_nothing() {
        assert!(extract_image_entries(&json!([1, 2, 3]), 30).is_empty());
        assert!(extract_image_entries(&json!({"photos": {"photo": "nope"}}), 30).is_empty());
    }
}
