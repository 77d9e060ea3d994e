//! Commit record parsed from `git log` output.

use crate::kind::extract_type;

/// Field separator used in the `git log --pretty` format.
pub const LOG_FIELD_SEPARATOR: char = '|';

/// Number of characters kept from the ISO timestamp (`YYYY-MM-DD`).
const DATE_LEN: usize = 10;

/// One version-control commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    /// The short commit hash.
    pub hash: String,

    /// The commit author name.
    pub author: String,

    /// The commit date (`YYYY-MM-DD`).
    pub date: String,

    /// The commit subject, including any conventional-commit prefix.
    pub message: String,

    /// The conventional-commit type (feat, fix, etc.), or `other`.
    pub r#type: String,
}

impl CommitEntry {
    /// Creates a new commit entry, deriving the type from the message.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let r#type = extract_type(&message).to_string();
        Self {
            hash: hash.into(),
            author: author.into(),
            date: date.into(),
            message,
            r#type,
        }
    }

    /// Parses one `hash|author|isoTimestamp|subject` line.
    ///
    /// Missing fields become empty strings. The subject keeps any further
    /// separators it contains.
    #[must_use]
    pub fn from_log_line(line: &str) -> Self {
        let mut fields = line.splitn(4, LOG_FIELD_SEPARATOR);
        let hash = fields.next().unwrap_or_default();
        let author = fields.next().unwrap_or_default();
        let timestamp = fields.next().unwrap_or_default();
        let message = fields.next().unwrap_or_default();

        Self::new(hash, author, truncate_date(timestamp), message)
    }
}

/// Keeps the calendar-date part of an ISO timestamp.
fn truncate_date(timestamp: &str) -> String {
    timestamp.chars().take(DATE_LEN).collect()
}
