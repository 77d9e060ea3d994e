//! Commit history retrieval through `git log`.

use log_agent_commit::CommitEntry;
use log_agent_exec::{CommandRunner, CommandSpec};
use tracing::debug;

use crate::{GitError, GitResult};

/// Default git program name.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// The `--pretty` format: `hash|author|isoTimestamp|subject`.
pub const LOG_FORMAT: &str = "%h|%an|%ai|%s";

/// Builds the `git log` arguments, optionally restricted to commits made at or
/// after midnight of `since` (`YYYY-MM-DD`).
#[must_use]
pub fn log_args(since: Option<&str>) -> Vec<String> {
    let mut args = vec!["log".to_string(), format!("--pretty=format:{LOG_FORMAT}")];
    if let Some(date) = since {
        args.push(format!("--since={date}T00:00:00"));
    }
    args
}

/// Parses `git log` output into commits, keeping the log's order.
///
/// Blank lines are skipped; empty or whitespace-only output yields no commits.
#[must_use]
pub fn parse_log(stdout: &str) -> Vec<CommitEntry> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(CommitEntry::from_log_line)
        .collect()
}

/// Reads commit history from the repository in the working directory.
pub struct History<'a, R> {
    runner: &'a R,
    program: String,
}

impl<'a, R: CommandRunner> History<'a, R> {
    /// Creates a history reader that runs `git`.
    #[must_use]
    pub fn new(runner: &'a R) -> Self {
        Self::with_program(runner, DEFAULT_GIT_PROGRAM)
    }

    /// Creates a history reader that runs the given git program.
    #[must_use]
    pub fn with_program(runner: &'a R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Returns commits, most recent first, optionally since a date.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepo`] outside a repository, or
    /// [`GitError::Exec`] if git cannot be run or fails otherwise.
    pub async fn commits(&self, since: Option<&str>) -> GitResult<Vec<CommitEntry>> {
        let spec = CommandSpec::new(&self.program).args(log_args(since));
        debug!(program = %self.program, ?since, "reading git log");

        let stdout = self
            .runner
            .run(&spec)
            .await?
            .ensure_success(&self.program)
            .map_err(GitError::from_exec)?;

        let commits = parse_log(&stdout);
        debug!(count = commits.len(), "parsed git log");
        Ok(commits)
    }
}
