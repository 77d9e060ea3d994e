//! CLI definition.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log_agent_config::{Config, find_and_load_config, load_config};

use crate::commands;

/// Rewrite a changelog section from git history with an AI coding agent.
#[derive(Debug, Parser)]
#[command(name = "log-agent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest log-agent.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sync git log to documentation
    Sync(commands::sync::SyncArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        let config = self.load_config()?;
        match self.command {
            Commands::Sync(args) => commands::sync::run(args, &config),
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => find_and_load_config().context("failed to load configuration"),
        }
    }
}
