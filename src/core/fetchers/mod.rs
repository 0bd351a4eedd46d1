pub mod image_search;
pub mod word_relations;

pub use image_search::{build_image_search_request, extract_image_entries, reported_api_failure};
pub use word_relations::{build_word_relations_request, extract_related_words};
