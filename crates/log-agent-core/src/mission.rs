//! Mission prompt construction.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use log_agent_commit::CommitEntry;

use crate::markers::{END_TAG, START_TAG};

/// The unit of work handed to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionSpec {
    /// The complete instruction text.
    pub prompt: String,

    /// The file the agent is expected to edit.
    pub target_file: PathBuf,
}

/// Renders commits into the agent instruction for `target_file`.
///
/// Commits are listed in input order; grouping by date is left to the agent.
#[must_use]
pub fn build_mission_spec(commits: &[CommitEntry], target_file: impl AsRef<Path>) -> MissionSpec {
    let target_file = target_file.as_ref();
    let target = target_file.display();

    let mut prompt = String::new();
    _ = writeln!(
        prompt,
        "You are a documentation update assistant. Update the changelog section in {target} based on the following git commits."
    );
    prompt.push('\n');
    prompt.push_str("## Rules\n");
    _ = writeln!(
        prompt,
        "1. Only modify content between `{START_TAG}` and `{END_TAG}` markers"
    );
    prompt.push_str("2. Group commits by date, most recent first\n");
    prompt.push_str("3. Each commit should be a single bullet point with a type badge\n");
    prompt.push_str("4. Do not modify anything outside the markers\n");
    prompt.push_str("5. Write in the same language as the existing document\n");
    prompt.push('\n');
    prompt.push_str("## Commits\n");
    // The block is always followed by a line break, even when empty
    let bullets: Vec<String> = commits
        .iter()
        .map(|commit| {
            format!(
                "- `{}` {} ({}, {})",
                commit.hash, commit.message, commit.author, commit.date
            )
        })
        .collect();
    prompt.push_str(&bullets.join("\n"));
    prompt.push_str("\n\n");
    prompt.push_str("## Output format example\n");
    prompt.push_str("```markdown\n");
    prompt.push_str("### 2026-02-05\n");
    prompt.push_str(
        "- **feat** Implement FilePreview component with transition effects (`8a2f3b4`)\n",
    );
    prompt.push_str("- **fix** Adjust MobileMenu padding for better responsiveness (`4d1e9a2`)\n");
    prompt.push_str("```\n");
    prompt.push('\n');
    _ = write!(prompt, "Directly edit {target}. Do not output any explanation.");

    MissionSpec {
        prompt,
        target_file: target_file.to_path_buf(),
    }
}
