//! Tag list parsing and validation.
//!
//! Uploads submit tags as a single comma-separated string. Parsing trims
//! whitespace, drops empty segments, and de-duplicates while preserving the
//! first occurrence order.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Compiled regex for allowed tag names.
static TAG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]*$").unwrap());

/// Maximum length of a single tag name.
const MAX_TAG_LENGTH: usize = 50;

/// Maximum number of tags per artwork.
const MAX_TAGS: usize = 20;

/// Parses a comma-separated tag string into a validated tag list.
///
/// # Rules
///
/// - Segments are trimmed; empty segments are dropped
/// - Duplicates are removed (first occurrence wins)
/// - Each tag must start with an alphanumeric character and may contain
///   letters, digits, spaces, underscores, and hyphens
/// - At most 20 tags of at most 50 characters each
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any tag violates the rules.
pub fn parse_tags(raw: &str) -> Result<Vec<String>, AppError> {
    let mut tags: Vec<String> = Vec::new();

    for segment in raw.split(',') {
        let tag = segment.trim();

        if tag.is_empty() {
            continue;
        }

        if tag.len() > MAX_TAG_LENGTH {
            return Err(AppError::bad_request(
                "Tag name is too long",
                json!({ "tag": tag, "max_length": MAX_TAG_LENGTH }),
            ));
        }

        if !TAG_NAME_REGEX.is_match(tag) {
            return Err(AppError::bad_request(
                "Tag contains invalid characters",
                json!({ "tag": tag }),
            ));
        }

        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    if tags.len() > MAX_TAGS {
        return Err(AppError::bad_request(
            "Too many tags",
            json!({ "count": tags.len(), "max": MAX_TAGS }),
        ));
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_trims() {
        let tags = parse_tags(" oil , landscape,portrait ").unwrap();
        assert_eq!(tags, vec!["oil", "landscape", "portrait"]);
    }

    #[test]
    fn test_drops_empty_segments() {
        let tags = parse_tags("oil,,  ,landscape").unwrap();
        assert_eq!(tags, vec!["oil", "landscape"]);
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let tags = parse_tags("oil,landscape,oil").unwrap();
        assert_eq!(tags, vec!["oil", "landscape"]);
    }

    #[test]
    fn test_empty_input_yields_no_tags() {
        assert!(parse_tags("").unwrap().is_empty());
        assert!(parse_tags(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_allows_spaces_and_hyphens_inside() {
        let tags = parse_tags("digital art,mixed-media,90s_retro").unwrap();
        assert_eq!(tags, vec!["digital art", "mixed-media", "90s_retro"]);
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert!(parse_tags("oil,<script>").is_err());
        assert!(parse_tags("-leading-hyphen").is_err());
    }

    #[test]
    fn test_rejects_too_long_tag() {
        let long = "a".repeat(51);
        assert!(parse_tags(&long).is_err());
    }

    #[test]
    fn test_rejects_too_many_tags() {
        let many = (0..21).map(|i| format!("tag{}", i)).collect::<Vec<_>>().join(",");
        assert!(parse_tags(&many).is_err());
    }
}
