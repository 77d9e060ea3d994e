//! Core library for log-agent.
//!
//! This crate provides the sync pipeline: marker inspection, prompt
//! construction, and delegation of the edit to an external AI agent.

mod agent;
mod confirm;
mod error;
mod hook;
mod markers;
mod mission;
mod sync;

pub use agent::{ALLOWED_TOOLS, AgentSettings, MISSION_TIMEOUT, MissionExecutor, MissionResult};
pub use confirm::{Confirm, StdinConfirm, is_affirmative};
pub use error::{CoreError, CoreResult};
pub use hook::SyncHook;
pub use markers::{END_TAG, MarkerCheck, START_TAG, check_markers, create_marker_file};
pub use mission::{MissionSpec, build_mission_spec};
pub use sync::{SyncOptions, SyncOutcome, SyncReport, Syncer, resolve_since};
