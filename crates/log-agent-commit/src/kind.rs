//! Conventional-commit type extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Type reported for subjects without a recognizable prefix.
pub const OTHER_TYPE: &str = "other";

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\(.+?\))?:").expect("invalid regex")
});

/// Extracts the conventional-commit type from a subject line.
///
/// Matches a run of word characters at the start of the subject, optionally
/// followed by a parenthesized scope, followed by a colon. Returns
/// [`OTHER_TYPE`] when the subject has no such prefix.
#[must_use]
pub fn extract_type(subject: &str) -> &str {
    TYPE_RE
        .captures(subject)
        .and_then(|caps| caps.name("type"))
        .map_or(OTHER_TYPE, |m| m.as_str())
}
