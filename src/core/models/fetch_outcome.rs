use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Images,
    Words,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Images => write!(f, "image search"),
            SourceKind::Words => write!(f, "related words"),
        }
    }
}

/// Why a remote call produced no usable body. Decode failures are grouped
/// with transport failures because neither yields a payload to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFault {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("transport timed out: {0}")]
    Timeout(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Value),
    HttpError(u16),
    NetworkError(FetchFault),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchOutcome::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<String> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::HttpError(status) => Some(format!("HTTP status {}", status)),
            FetchOutcome::NetworkError(fault) => Some(fault.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub images: FetchOutcome,
    pub words: FetchOutcome,
}

impl AggregateResult {
    pub fn outcome_for(&self, source: SourceKind) -> &FetchOutcome {
        match source {
            SourceKind::Images => &self.images,
            SourceKind::Words => &self.words,
        }
    }

    pub fn failed_sources(&self) -> Vec<SourceKind> {
        [SourceKind::Images, SourceKind::Words]
            .into_iter()
            .filter(|source| !self.outcome_for(*source).is_success())
            .collect()
    }

    pub fn is_total_failure(&self) -> bool {
        !self.images.is_success() && !self.words.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_reason_describes_each_variant() {
        assert_eq!(FetchOutcome::Success(json!({})).failure_reason(), None);
        assert_eq!(
            FetchOutcome::HttpError(503).failure_reason().unwrap(),
            "HTTP status 503"
        );
        assert_eq!(
            FetchOutcome::NetworkError(FetchFault::Decode("eof".to_string()))
                .failure_reason()
                .unwrap(),
            "response body could not be decoded: eof"
        );
    }

    #[test]
    fn test_failed_sources_lists_only_failures() {
        let aggregate = AggregateResult {
            images: FetchOutcome::Success(json!({"photos": {"photo": []}})),
            words: FetchOutcome::HttpError(404),
        };

        assert_eq!(aggregate.failed_sources(), vec![SourceKind::Words]);
        assert!(!aggregate.is_total_failure());
    }

    #[test]
    fn test_total_failure_requires_both_sources_to_fail() {
        let aggregate = AggregateResult {
            images: FetchOutcome::NetworkError(FetchFault::Connection("refused".to_string())),
            words: FetchOutcome::HttpError(500),
        };

        assert!(aggregate.is_total_failure());
        assert_eq!(
            aggregate.failed_sources(),
            vec![SourceKind::Images, SourceKind::Words]
        );
    }

    #[test]
    fn test_payload_only_present_on_success() {
        let payload = json!({"noun": {"syn": ["kitty"]}});

        assert_eq!(FetchOutcome::Success(payload.clone()).payload(), Some(&payload));
        assert!(FetchOutcome::HttpError(500).payload().is_none());
    }
}
