//! Sentinel markers delimiting the editable region of the target file.
//!
//! Marker presence is plain substring containment, and the marker block is
//! the text between the first start tag and the first end tag.

use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Start of the region the agent may edit.
pub const START_TAG: &str = "<!-- log-agent-start -->";

/// End of the region the agent may edit.
pub const END_TAG: &str = "<!-- log-agent-end -->";

/// Content written when the target file is created.
const TEMPLATE: &str = "# Changelog\n\n<!-- log-agent-start -->\n<!-- log-agent-end -->\n";

static DATE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"###\s+(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})").expect("invalid regex")
});

/// Result of inspecting a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCheck {
    /// Both tags are present.
    pub found: bool,

    /// False only when the file is absent.
    pub file_exists: bool,

    /// Latest `### YYYY-MM-DD` header inside the marker block.
    pub last_date: Option<String>,

    /// The start tag literal.
    pub start_tag: &'static str,

    /// The end tag literal.
    pub end_tag: &'static str,
}

impl MarkerCheck {
    fn new(found: bool, file_exists: bool, last_date: Option<String>) -> Self {
        Self {
            found,
            file_exists,
            last_date,
            start_tag: START_TAG,
            end_tag: END_TAG,
        }
    }

    /// Inspects file contents that were read successfully.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let found = content.contains(START_TAG) && content.contains(END_TAG);
        let last_date = if found { last_date(content) } else { None };
        Self::new(found, true, last_date)
    }
}

/// Inspects the target file for both markers and the latest recorded date.
///
/// A file that is absent reports `file_exists = false`; any other read failure
/// (permissions, invalid UTF-8, a directory) reports an existing file without
/// markers.
pub fn check_markers(path: impl AsRef<Path>) -> MarkerCheck {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => MarkerCheck::from_content(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(?path, "target file does not exist");
            MarkerCheck::new(false, false, None)
        }
        Err(e) => {
            debug!(?path, error = %e, "target file is unreadable");
            MarkerCheck::new(false, true, None)
        }
    }
}

/// Writes a new target file holding a heading and an empty marker block.
///
/// Overwrites any existing file.
///
/// # Errors
///
/// Returns the underlying error if the file cannot be written.
pub fn create_marker_file(path: impl AsRef<Path>) -> io::Result<()> {
    std::fs::write(path, TEMPLATE)
}

/// Returns the maximum date header in the marker block.
///
/// Dates are fixed-width and zero-padded, so string order is date order.
fn last_date(content: &str) -> Option<String> {
    let start = content.find(START_TAG)? + START_TAG.len();
    let end = content.find(END_TAG)?;
    let block = content.get(start..end)?;

    DATE_HEADER_RE
        .captures_iter(block)
        .filter_map(|caps| caps.name("date"))
        .map(|m| m.as_str())
        .max()
        .map(str::to_string)
}
