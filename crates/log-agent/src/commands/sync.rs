//! Sync command.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use log_agent_config::Config;
use log_agent_core::{
    AgentSettings, CoreError, StdinConfirm, SyncHook, SyncOptions, SyncOutcome, SyncReport,
    Syncer,
};
use log_agent_exec::SystemRunner;

/// Arguments for the sync command.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Only include commits after this date (e.g. 2026-02-01)
    #[arg(long, value_name = "DATE")]
    pub since: Option<NaiveDate>,

    /// Target file to update (default: CHANGELOG.md)
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,

    /// Preview the mission spec without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Create a missing target file without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl SyncArgs {
    /// Resolves the run options, filling the target from configuration.
    fn options(&self, config: &Config) -> SyncOptions {
        SyncOptions {
            since: self.since,
            target: self
                .target
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.sync.target)),
            dry_run: self.dry_run,
            yes: self.yes,
        }
    }
}

/// Prints pipeline progress as it happens.
struct ConsoleProgress;

impl SyncHook for ConsoleProgress {
    fn on_target_created(&self, target: &Path) {
        println!("Created {} with log-agent markers.", target.display());
    }

    fn on_commits_found(&self, count: usize) {
        println!("Found {count} commit(s)");
    }

    fn on_mission_start(&self, program: &str) {
        println!("Mission spec generated, invoking {program} -p...");
    }
}

/// Category of a failed run, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    /// The agent binary is not installed.
    AgentMissing,
    /// Not inside a git repository.
    NotARepo,
    /// Anything else.
    Other,
}

fn classify(err: &CoreError) -> Failure {
    if err.is_agent_missing() {
        Failure::AgentMissing
    } else if err.is_not_a_repo() {
        Failure::NotARepo
    } else {
        Failure::Other
    }
}

/// Runs the sync command.
pub fn run(args: SyncArgs, config: &Config) -> Result<ExitCode> {
    let options = args.options(config);
    debug!(?options, "sync options");

    let runner = SystemRunner::new();
    let confirm = StdinConfirm;
    let syncer = Syncer::new(&runner, &confirm)
        .with_git_program(&config.git.command)
        .with_agent(AgentSettings {
            command: config.agent.command.clone(),
            prefix_args: config.agent.prefix_args.clone(),
        })
        .with_hook(Box::new(ConsoleProgress));

    // Create a tokio runtime for the child processes
    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;

    println!("Starting log-agent sync...");

    match rt.block_on(syncer.run(&options)) {
        Ok(report) => Ok(print_report(&report, &options)),
        Err(err) => {
            print_failure(&err, &config.agent.command);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_report(report: &SyncReport, options: &SyncOptions) -> ExitCode {
    let target = options.target.display();

    match &report.outcome {
        SyncOutcome::MissingMarkers { start_tag, end_tag } => {
            eprintln!("Markers not found in {target}.");
            eprintln!("Add these lines to your file:\n  {start_tag}\n  {end_tag}");
        }
        SyncOutcome::Declined => eprintln!("Aborted."),
        SyncOutcome::NoCommits => println!("No commits found, skipping sync."),
        SyncOutcome::Previewed { prompt, .. } => {
            println!("--- Dry Run: Mission Spec ---");
            println!("{prompt}");
            println!("--- End ---");
        }
        SyncOutcome::Completed { output, .. } => {
            println!("Sync completed successfully.");
            println!("{output}");
        }
    }

    if report.outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_failure(err: &CoreError, agent: &str) {
    match classify(err) {
        Failure::AgentMissing => {
            eprintln!("Agent CLI `{agent}` is not installed.");
            eprintln!("Run: npm install -g @anthropic-ai/claude-code");
        }
        Failure::NotARepo => eprintln!("Not a git repository."),
        Failure::Other => eprintln!("Sync failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_agent_exec::ExecError;
    use log_agent_git::GitError;

    fn args(target: Option<&str>) -> SyncArgs {
        SyncArgs {
            since: None,
            target: target.map(PathBuf::from),
            dry_run: false,
            yes: false,
        }
    }

    #[test]
    fn test_options_default_target_from_config() {
        let options = args(None).options(&Config::default());
        assert_eq!(options.target, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_options_configured_target() {
        let mut config = Config::default();
        config.sync.target = "docs/NEWS.md".to_string();

        let options = args(None).options(&config);
        assert_eq!(options.target, PathBuf::from("docs/NEWS.md"));
    }

    #[test]
    fn test_options_flag_overrides_config() {
        let mut config = Config::default();
        config.sync.target = "docs/NEWS.md".to_string();

        let options = args(Some("README.md")).options(&config);
        assert_eq!(options.target, PathBuf::from("README.md"));
    }

    #[test]
    fn test_classify_agent_missing() {
        let err = CoreError::Mission {
            program: "claude".to_string(),
            source: ExecError::NotFound {
                program: "claude".to_string(),
            },
        };
        assert_eq!(classify(&err), Failure::AgentMissing);
    }

    #[test]
    fn test_classify_not_a_repo() {
        let err = CoreError::Git(GitError::NotARepo("fatal".to_string()));
        assert_eq!(classify(&err), Failure::NotARepo);
    }

    #[test]
    fn test_classify_other() {
        let err = CoreError::Mission {
            program: "claude".to_string(),
            source: ExecError::Failed {
                program: "claude".to_string(),
                status: Some(1),
                stderr: String::new(),
            },
        };
        assert_eq!(classify(&err), Failure::Other);

        let err = CoreError::Git(GitError::Exec(ExecError::NotFound {
            program: "git".to_string(),
        }));
        assert_eq!(classify(&err), Failure::Other);
    }

    #[test]
    fn test_report_exit_codes() {
        let options = SyncOptions::new("CHANGELOG.md");
        let ok = SyncReport {
            created_target: false,
            outcome: SyncOutcome::NoCommits,
        };
        let declined = SyncReport {
            created_target: false,
            outcome: SyncOutcome::Declined,
        };

        assert_eq!(print_report(&ok, &options), ExitCode::SUCCESS);
        assert_eq!(print_report(&declined, &options), ExitCode::FAILURE);
    }
}
