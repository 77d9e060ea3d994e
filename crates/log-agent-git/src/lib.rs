//! Git history reader for log-agent.
//!
//! This crate turns `git log` output into [`CommitEntry`] records:
//! - Builds the log invocation with a fixed `--pretty` format
//! - Runs it through a [`CommandRunner`](log_agent_exec::CommandRunner)
//! - Parses each line and classifies repository errors
//!
//! [`CommitEntry`]: log_agent_commit::CommitEntry

mod error;
mod history;

pub use error::{GitError, GitResult};
pub use history::{DEFAULT_GIT_PROGRAM, History, LOG_FORMAT, log_args, parse_log};
