//! Commit types for log-agent.
//!
//! This crate provides the commit record handed from the history reader to
//! the prompt builder:
//! - [`CommitEntry`]: One commit parsed from a `git log` line
//! - [`extract_type`]: Conventional-commit type classification

mod entry;
mod kind;

pub use entry::{CommitEntry, LOG_FIELD_SEPARATOR};
pub use kind::{OTHER_TYPE, extract_type};
