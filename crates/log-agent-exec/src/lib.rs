//! External process execution for log-agent.
//!
//! Every process log-agent launches (the version-control binary and the AI
//! agent) goes through the [`CommandRunner`] trait, so callers can be tested
//! with a scripted runner instead of real processes:
//! - [`CommandSpec`]: What to run, with optional stdin and timeout
//! - [`CommandOutput`]: Exit status and captured output
//! - [`SystemRunner`]: The tokio-backed implementation

mod command;
mod error;
mod system;

pub use command::{CommandOutput, CommandRunner, CommandSpec};
pub use error::{ExecError, ExecResult};
pub use system::SystemRunner;
