//! Field validation rules for rundown items.
//!
//! Each rule returns the human-readable rule text on failure so the caller
//! can show it next to the offending field.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A violated validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RuleViolation {
    message: String,
}

impl RuleViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a single rule check.
pub type RuleResult = std::result::Result<(), RuleViolation>;

const MIN_LEN: usize = 3;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9\-_]+$").expect("Invalid slug regex"));
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}(:[0-9]{2})?$").expect("Invalid duration regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("Invalid link regex"));

/// Title: required, at least 3 characters.
pub fn validate_title(title: &str) -> RuleResult {
    if title.is_empty() {
        return Err(RuleViolation::new("Title is required"));
    }
    if title.chars().count() < MIN_LEN {
        return Err(RuleViolation::new("Title must be at least 3 characters"));
    }
    Ok(())
}

/// Slug: required, at least 3 characters, lowercase letters, digits,
/// hyphens and underscores only.
pub fn validate_slug(slug: &str) -> RuleResult {
    if slug.is_empty() {
        return Err(RuleViolation::new("Slug is required"));
    }
    if slug.chars().count() < MIN_LEN {
        return Err(RuleViolation::new("Slug must be at least 3 characters"));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(RuleViolation::new(
            "Slug must be lowercase with only letters, numbers, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// Duration: optional, otherwise `MM:SS` or `HH:MM:SS`.
pub fn validate_duration(duration: &str) -> RuleResult {
    if duration.is_empty() || DURATION_RE.is_match(duration) {
        Ok(())
    } else {
        Err(RuleViolation::new(
            "Duration must be in MM:SS or HH:MM:SS format",
        ))
    }
}

/// Link: optional, otherwise an http(s) URL.
pub fn validate_link(link: &str) -> RuleResult {
    if link.is_empty() || LINK_RE.is_match(link) {
        Ok(())
    } else {
        Err(RuleViolation::new(
            "Link must be a valid URL starting with http:// or https://",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_rejects_short_uppercase() {
        let err = validate_slug("AB").unwrap_err();
        assert_eq!(err.message(), "Slug must be at least 3 characters");
    }

    #[test]
    fn test_slug_rejects_uppercase() {
        let err = validate_slug("Story-1").unwrap_err();
        assert!(err.message().starts_with("Slug must be lowercase"));
        assert!(validate_slug("has space").is_err());
    }

    #[test]
    fn test_slug_accepts_valid() {
        assert!(validate_slug("story-1_a").is_ok());
        assert!(validate_slug("abc").is_ok());
    }

    #[test]
    fn test_slug_required() {
        assert_eq!(validate_slug("").unwrap_err().message(), "Slug is required");
    }

    #[test]
    fn test_title_rules() {
        assert_eq!(validate_title("").unwrap_err().message(), "Title is required");
        assert!(validate_title("Hi").is_err());
        assert!(validate_title("Top").is_ok());
    }

    #[test]
    fn test_duration_rules() {
        assert!(validate_duration("").is_ok());
        assert!(validate_duration("1:30").is_ok());
        assert!(validate_duration("01:02:03").is_ok());
        assert!(validate_duration("90").is_err());
        assert!(validate_duration("1:3").is_err());
        assert!(validate_duration("100:00").is_err());
    }

    #[test]
    fn test_duration_rejects_non_ascii_digits() {
        assert!(validate_duration("١:٣٠").is_err());
        assert!(validate_duration("１:３０").is_err());
    }

    #[test]
    fn test_link_rules() {
        assert!(validate_link("").is_ok());
        assert!(validate_link("https://example.com/story").is_ok());
        assert!(validate_link("ftp://example.com").is_err());
    }
}
