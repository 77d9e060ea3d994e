//! Configuration management for log-agent.
//!
//! This crate handles loading the optional `log-agent.toml` configuration file.
//! Every setting has a default, so running without a file is the common case.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{AgentConfig, Config, GitConfig, SyncConfig};
