//! Execution error types.

use std::time::Duration;

use thiserror::Error;

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program could not be found on `PATH`.
    #[error("{program}: command not found")]
    NotFound {
        /// The program that was looked up.
        program: String,
    },

    /// The program exists but could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The program did not finish within its timeout.
    #[error("{program} timed out after {}s", timeout.as_secs())]
    TimedOut {
        /// The program that timed out.
        program: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The program exited unsuccessfully.
    #[error("{program} exited with {}: {}", status_label(*status), stderr.trim())]
    Failed {
        /// The program that failed.
        program: String,
        /// The exit code, if the process was not killed by a signal.
        status: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// I/O failure while talking to a running program.
    #[error("I/O error while running {program}: {source}")]
    Io {
        /// The program being run.
        program: String,
        /// The underlying error.
        source: std::io::Error,
    },
}

impl ExecError {
    /// Classifies a spawn failure.
    pub(crate) fn spawn(program: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                program: program.to_string(),
            }
        } else {
            Self::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }

    /// Returns true if the program binary was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the captured standard error, if the program ran to completion.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Failed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

fn status_label(status: Option<i32>) -> String {
    status.map_or_else(|| "signal".to_string(), |code| format!("status {code}"))
}

/// Result type for execution operations.
pub type ExecResult<T> = Result<T, ExecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_display() {
        let err = ExecError::NotFound {
            program: "claude".to_string(),
        };
        assert_eq!(err.to_string(), "claude: command not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_spawn_classifies_not_found() {
        let err = ExecError::spawn("claude", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());

        let err = ExecError::spawn("claude", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ExecError::Spawn { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_timed_out_display() {
        let err = ExecError::TimedOut {
            program: "claude".to_string(),
            timeout: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "claude timed out after 60s");
    }

    #[test]
    fn test_failed_display() {
        let err = ExecError::Failed {
            program: "git".to_string(),
            status: Some(128),
            stderr: "fatal: not a git repository\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git exited with status 128: fatal: not a git repository"
        );
        assert_eq!(err.stderr(), Some("fatal: not a git repository\n"));
    }

    #[test]
    fn test_failed_by_signal_display() {
        let err = ExecError::Failed {
            program: "claude".to_string(),
            status: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "claude exited with signal: ");
    }

    #[test]
    fn test_error_is_debug() {
        let err = ExecError::NotFound {
            program: "git".to_string(),
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("NotFound"));
    }
}
