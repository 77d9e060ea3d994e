//! Core error types.

use log_agent_exec::ExecError;
use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading history failed.
    #[error(transparent)]
    Git(#[from] log_agent_git::GitError),

    /// The agent process failed.
    #[error("{program} -p execution failed: {source}")]
    Mission {
        /// The agent program.
        program: String,
        /// The underlying failure.
        source: ExecError,
    },

    /// Reading the confirmation answer failed.
    #[error("failed to read confirmation: {0}")]
    Confirm(#[source] std::io::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Returns true if the agent binary could not be found.
    #[must_use]
    pub fn is_agent_missing(&self) -> bool {
        matches!(self, Self::Mission { source, .. } if source.is_not_found())
    }

    /// Returns true if the working directory is not a git repository.
    #[must_use]
    pub fn is_not_a_repo(&self) -> bool {
        matches!(self, Self::Git(log_agent_git::GitError::NotARepo(_)))
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
