use std::fmt;

use serde::Serialize;

use super::fetch_outcome::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub display_url: String,
    pub link_url: String,
    pub title: String,
}

impl ImageEntry {
    pub fn new(display_url: String, link_url: String, title: String) -> Self {
        Self {
            display_url,
            link_url,
            title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelatedWord(pub String);

impl RelatedWord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultList {
    Images,
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Image(ImageEntry),
    Word(RelatedWord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_images: usize,
    pub max_words: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserNotice {
    EmptyQuery,
    SourceFailed { source: SourceKind, reason: String },
    AllSourcesFailed,
}

impl fmt::Display for UserNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserNotice::EmptyQuery => write!(f, "The search term is empty"),
            UserNotice::SourceFailed { source, reason } => {
                write!(f, "The {} request failed ({})", source, reason)
            }
            UserNotice::AllSourcesFailed => write!(f, "No results could be fetched"),
        }
    }
}
