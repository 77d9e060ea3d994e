//! Progress hooks for the sync pipeline.

use std::path::Path;

/// Observes a sync run as it progresses.
///
/// Hooks are called at these points:
/// 1. `on_target_created` - After a missing target file was created
/// 2. `on_commits_found` - After a non-empty history was read
/// 3. `on_mission_start` - Before the agent is launched
///
/// Every method defaults to doing nothing.
pub trait SyncHook: Send + Sync {
    /// Called once the target file has been written with empty markers.
    fn on_target_created(&self, _target: &Path) {}

    /// Called with the number of commits the prompt will list.
    fn on_commits_found(&self, _count: usize) {}

    /// Called right before the agent program is started.
    fn on_mission_start(&self, _program: &str) {}
}
