//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sync command defaults.
    #[serde(default)]
    pub sync: SyncConfig,

    /// Version-control binary.
    #[serde(default)]
    pub git: GitConfig,

    /// AI agent binary.
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Sync command defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// File updated when `--target` is not given.
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

fn default_target() -> String {
    "CHANGELOG.md".to_string()
}

/// Version-control binary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Program used to read history.
    #[serde(default = "default_git_command")]
    pub command: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            command: default_git_command(),
        }
    }
}

fn default_git_command() -> String {
    "git".to_string()
}

/// AI agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Program launched for the mission.
    #[serde(default = "default_agent_command")]
    pub command: String,

    /// Arguments placed before the agent flags (e.g. a package runner's).
    #[serde(default)]
    pub prefix_args: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            command: default_agent_command(),
            prefix_args: Vec::new(),
        }
    }
}

fn default_agent_command() -> String {
    "claude".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sync.target, "CHANGELOG.md");
        assert_eq!(config.git.command, "git");
        assert_eq!(config.agent.command, "claude");
        assert!(config.agent.prefix_args.is_empty());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let toml = r#"
            [sync]
            target = "docs/HISTORY.md"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.sync.target, "docs/HISTORY.md");
        assert_eq!(config.agent.command, "claude"); // default
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            [sync]
            target = "README.md"

            [git]
            command = "/usr/bin/git"

            [agent]
            command = "npx"
            prefix_args = ["@anthropic-ai/claude-code"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.sync.target, "README.md");
        assert_eq!(config.git.command, "/usr/bin/git");
        assert_eq!(config.agent.command, "npx");
        assert_eq!(config.agent.prefix_args, vec!["@anthropic-ai/claude-code"]);
    }

    #[test]
    fn test_deserialize_wrong_type() {
        let toml = r#"
            [agent]
            prefix_args = "not-a-list"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[sync]"));
        assert!(toml_str.contains("target = \"CHANGELOG.md\""));
        assert!(toml_str.contains("[agent]"));
    }
}
