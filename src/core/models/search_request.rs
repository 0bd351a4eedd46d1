use super::fetch_outcome::SourceKind;

/// A GET request for one remote source. Requests always ask for JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub source: SourceKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchEndpoint {
    pub base_url: String,
    pub api_key: String,
    pub license_filter: String,
    pub sort_order: String,
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRelationsEndpoint {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub images: ImageSearchEndpoint,
    pub words: WordRelationsEndpoint,
}
