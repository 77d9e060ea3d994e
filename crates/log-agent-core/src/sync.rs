//! The sync pipeline.
//!
//! Inspect markers → create the target if needed → resolve the cutoff date →
//! read commits → build the prompt → preview or hand it to the agent.

use std::path::PathBuf;

use chrono::NaiveDate;
use log_agent_exec::CommandRunner;
use log_agent_git::{DEFAULT_GIT_PROGRAM, History};
use tracing::{info, warn};

use crate::{
    AgentSettings, Confirm, CoreError, CoreResult, MarkerCheck, MissionExecutor, SyncHook,
    build_mission_spec, check_markers, create_marker_file,
};

/// Options for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Only include commits on or after this date.
    pub since: Option<NaiveDate>,

    /// The file to update.
    pub target: PathBuf,

    /// Print the prompt instead of running the agent.
    pub dry_run: bool,

    /// Create a missing target without asking.
    pub yes: bool,
}

impl SyncOptions {
    /// Creates options for the given target with every flag off.
    #[must_use]
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            since: None,
            target: target.into(),
            dry_run: false,
            yes: false,
        }
    }
}

/// How a sync run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target exists but lacks the markers; nothing was changed.
    MissingMarkers {
        /// The start tag to add.
        start_tag: &'static str,
        /// The end tag to add.
        end_tag: &'static str,
    },

    /// The user refused to create the missing target.
    Declined,

    /// No commits matched; nothing to do.
    NoCommits,

    /// Dry run: the prompt that would have been sent.
    Previewed {
        /// Number of commits in the prompt.
        commits: usize,
        /// The rendered prompt.
        prompt: String,
    },

    /// The agent ran successfully.
    Completed {
        /// Number of commits in the prompt.
        commits: usize,
        /// The agent's output.
        output: String,
    },
}

impl SyncOutcome {
    /// Returns true if the run should exit with a failure status.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::MissingMarkers { .. } | Self::Declined)
    }
}

/// Result of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The target file was created during this run.
    pub created_target: bool,

    /// How the run ended.
    pub outcome: SyncOutcome,
}

/// Picks the commit cutoff: the explicit date, else the latest date already
/// recorded in the marker block.
#[must_use]
pub fn resolve_since(explicit: Option<NaiveDate>, markers: Option<&MarkerCheck>) -> Option<String> {
    explicit
        .map(|date| date.format("%Y-%m-%d").to_string())
        .or_else(|| markers.and_then(|check| check.last_date.clone()))
}

/// Runs the sync pipeline.
pub struct Syncer<'a, R, C> {
    runner: &'a R,
    confirm: &'a C,
    git_program: String,
    agent: AgentSettings,
    hooks: Vec<Box<dyn SyncHook>>,
}

impl<'a, R: CommandRunner, C: Confirm> Syncer<'a, R, C> {
    /// Creates a syncer using `git` and the default agent.
    #[must_use]
    pub fn new(runner: &'a R, confirm: &'a C) -> Self {
        Self {
            runner,
            confirm,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            agent: AgentSettings::default(),
            hooks: Vec::new(),
        }
    }

    /// Sets the git program.
    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Sets how the agent is launched.
    #[must_use]
    pub fn with_agent(mut self, agent: AgentSettings) -> Self {
        self.agent = agent;
        self
    }

    /// Adds a progress hook.
    #[must_use]
    pub fn with_hook(mut self, hook: Box<dyn SyncHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Runs one sync.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be created, history cannot be
    /// read, the confirmation cannot be read, or the agent fails.
    pub async fn run(&self, options: &SyncOptions) -> CoreResult<SyncReport> {
        let mut created_target = false;

        let markers = if options.dry_run {
            None
        } else {
            let check = check_markers(&options.target);
            if !check.found {
                if check.file_exists {
                    warn!(target = %options.target.display(), "markers not found");
                    return Ok(SyncReport {
                        created_target,
                        outcome: SyncOutcome::MissingMarkers {
                            start_tag: check.start_tag,
                            end_tag: check.end_tag,
                        },
                    });
                }

                if !self.approve_creation(options)? {
                    return Ok(SyncReport {
                        created_target,
                        outcome: SyncOutcome::Declined,
                    });
                }

                create_marker_file(&options.target)?;
                created_target = true;
                info!(target = %options.target.display(), "created target file");
                for hook in &self.hooks {
                    hook.on_target_created(&options.target);
                }
            }
            Some(check)
        };

        let since = resolve_since(options.since, markers.as_ref());
        info!(?since, "resolved commit cutoff");

        let commits = History::with_program(self.runner, &self.git_program)
            .commits(since.as_deref())
            .await?;

        if commits.is_empty() {
            return Ok(SyncReport {
                created_target,
                outcome: SyncOutcome::NoCommits,
            });
        }
        info!(count = commits.len(), "found commits");
        for hook in &self.hooks {
            hook.on_commits_found(commits.len());
        }

        let spec = build_mission_spec(&commits, &options.target);

        if options.dry_run {
            return Ok(SyncReport {
                created_target,
                outcome: SyncOutcome::Previewed {
                    commits: commits.len(),
                    prompt: spec.prompt,
                },
            });
        }

        for hook in &self.hooks {
            hook.on_mission_start(&self.agent.command);
        }
        let result = MissionExecutor::new(self.runner, self.agent.clone())
            .execute(&spec)
            .await?;

        Ok(SyncReport {
            created_target,
            outcome: SyncOutcome::Completed {
                commits: commits.len(),
                output: result.output,
            },
        })
    }

    fn approve_creation(&self, options: &SyncOptions) -> CoreResult<bool> {
        if options.yes {
            return Ok(true);
        }
        let message = format!("{} not found. Create it?", options.target.display());
        self.confirm.confirm(&message).map_err(CoreError::Confirm)
    }
}
