use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("search term is empty")]
    EmptyQuery,
}

/// A trimmed, non-empty search term. The only way to obtain one is through
/// [`SearchTerm::parse`], so holding a `SearchTerm` means validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(input: Option<&str>) -> Result<Self, InputError> {
        let trimmed = input.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            log::debug!("[SEARCH_TERM] rejecting blank input");
            return Err(InputError::EmptyQuery);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate(input: Option<&str>) -> bool {
    SearchTerm::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_input() {
        assert!(!validate(None));
    }

    #[test]
    fn test_validate_rejects_blank_inputs() {
        for input in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
            assert!(!validate(Some(input)), "expected {:?} to be rejected", input);
        }
    }

    #[test]
    fn test_validate_accepts_non_blank_inputs() {
        for input in ["cat", " cat ", "x", "red panda"] {
            assert!(validate(Some(input)), "expected {:?} to be accepted", input);
        }
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let term = SearchTerm::parse(Some("  ocean waves \n")).unwrap();

        assert_eq!(term.as_str(), "ocean waves");
        assert_eq!(format!("{}", term), "ocean waves");
    }

    #[test]
    fn test_parse_blank_returns_empty_query_error() {
        let error = SearchTerm::parse(Some("    ")).unwrap_err();

        assert_eq!(error, InputError::EmptyQuery);
        assert_eq!(error.to_string(), "search term is empty");
    }
}
