//! Git error types.

use log_agent_exec::ExecError;
use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(String),

    /// Running git failed.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl GitError {
    /// Classifies a failed git invocation.
    pub(crate) fn from_exec(err: ExecError) -> Self {
        match err.stderr() {
            Some(stderr) if stderr.contains("not a git repository") => {
                Self::NotARepo(stderr.trim().to_string())
            }
            _ => Self::Exec(err),
        }
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
