//! Big Huge Thesaurus request building and payload extraction.

use serde_json::Value;

use crate::core::models::{RelatedWord, SearchRequest, SearchTerm, SourceKind, WordRelationsEndpoint};

pub fn build_word_relations_request(
    term: &SearchTerm,
    endpoint: &WordRelationsEndpoint,
) -> SearchRequest {
    let url = format!(
        "{}/{}/{}/json",
        endpoint.base_url.trim_end_matches('/'),
        urlencoding::encode(&endpoint.api_key),
        urlencoding::encode(term.as_str()),
    );

    SearchRequest {
        source: SourceKind::Words,
        url,
    }
}

/// Noun-sense synonyms, capped at `max_entries`. Non-string entries are
/// skipped.
pub fn extract_related_words(payload: &Value, max_entries: usize) -> Vec<RelatedWord> {
    let Some(synonyms) = payload
        .get("noun")
        .and_then(|noun| noun.get("syn"))
        .and_then(Value::as_array)
    else {
        log::debug!("[WORDS] Payload has no noun synonyms");
        return Vec::new();
    };

    synonyms
        .iter()
        .filter_map(Value::as_str)
        .take(max_entries)
        .map(|word| RelatedWord(word.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_endpoint() -> WordRelationsEndpoint {
        WordRelationsEndpoint {
            base_url: "https://words.bighugelabs.com/api/2".to_string(),
            api_key: "words-key".to_string(),
        }
    }

    #[test]
    fn test_build_request_embeds_term_as_path_segment() {
        let term = SearchTerm::parse(Some("cat")).unwrap();

        let request = build_word_relations_request(&term, &create_test_endpoint());

        assert_eq!(request.source, SourceKind::Words);
        assert_eq!(
            request.url,
            "https://words.bighugelabs.com/api/2/words-key/cat/json"
        );
    }

    #[test]
    fn test_build_request_encodes_term_and_tolerates_trailing_slash() {
        let term = SearchTerm::parse(Some("ice cream/cone")).unwrap();
        let endpoint = WordRelationsEndpoint {
            base_url: "https://words.example.com/api/2/".to_string(),
            api_key: "k".to_string(),
        };

        let request = build_word_relations_request(&term, &endpoint);

        assert_eq!(
            request.url,
            "https://words.example.com/api/2/k/ice%20cream%2Fcone/json"
        );
    }

    #[test]
    fn test_extract_returns_all_synonyms_below_cap() {
        let payload = json!({"noun": {"syn": ["a", "b", "c", "d", "e", "f", "g", "h"]}});

        let words = extract_related_words(&payload, 15);

        assert_eq!(words.len(), 8);
        assert_eq!(words[0].as_str(), "a");
        assert_eq!(words[7].as_str(), "h");
    }

    #[test]
    fn test_extract_caps_synonyms() {
        let synonyms: Vec<String> = (0..40).map(|i| format!("w{}", i)).collect();
        let payload = json!({"noun": {"syn": synonyms}});

        let words = extract_related_words(&payload, 15);

        assert_eq!(words.len(), 15);
        assert_eq!(words[14].as_str(), "w14");
    }

    #[test]
    fn test_extract_skips_non_string_synonyms() {
        let payload = json!({"noun": {"syn": ["kitty", null, 7, "moggy"]}});

        let words = extract_related_words(&payload, 15);

        assert_eq!(words, vec![RelatedWord("kitty".to_string()), RelatedWord("moggy".to_string())]);
    }

    #[test]
    fn test_extract_ignores_other_senses() {
        let payload = json!({"verb": {"syn": ["run", "sprint"]}});

        assert!(extract_related_words(&payload, 15).is_empty());
    }

    #[test]
    fn test_extract_noun_without_synonyms_yields_nothing() {
        let payload = json!({"noun": {"ant": ["dog"]}});

        assert!(extract_related_words(&payload, 15).is_empty());
    }
}
