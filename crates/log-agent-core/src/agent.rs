//! Mission execution through the external AI agent.

use std::time::Duration;

use log_agent_exec::{CommandRunner, CommandSpec};
use tracing::{debug, info};

use crate::{CoreError, CoreResult, MissionSpec};

/// Tools the agent may use: reading and editing files only.
pub const ALLOWED_TOOLS: [&str; 2] = ["Read", "Edit"];

/// Wall-clock limit for one mission.
pub const MISSION_TIMEOUT: Duration = Duration::from_secs(60);

/// How to launch the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSettings {
    /// The agent program.
    pub command: String,

    /// Arguments placed before the agent flags.
    pub prefix_args: Vec<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            command: "claude".to_string(),
            prefix_args: Vec::new(),
        }
    }
}

/// Output of a completed mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionResult {
    /// Whether the agent finished successfully.
    pub success: bool,

    /// The agent's standard output.
    pub output: String,
}

/// Hands missions to the agent in non-interactive mode.
pub struct MissionExecutor<'a, R> {
    runner: &'a R,
    settings: AgentSettings,
}

impl<'a, R: CommandRunner> MissionExecutor<'a, R> {
    /// Creates an executor with the given launch settings.
    #[must_use]
    pub fn new(runner: &'a R, settings: AgentSettings) -> Self {
        Self { runner, settings }
    }

    /// Builds the agent invocation: prompt on stdin, restricted tools, bounded time.
    #[must_use]
    pub fn command(&self, spec: &MissionSpec) -> CommandSpec {
        CommandSpec::new(&self.settings.command)
            .args(self.settings.prefix_args.iter().cloned())
            .args(["-p", "--allowedTools"])
            .arg(ALLOWED_TOOLS.join(","))
            .stdin(spec.prompt.clone())
            .timeout(MISSION_TIMEOUT)
    }

    /// Runs the mission and returns the agent's output.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Mission`] if the agent is missing, times out, or
    /// exits unsuccessfully.
    pub async fn execute(&self, spec: &MissionSpec) -> CoreResult<MissionResult> {
        let program = &self.settings.command;
        let command = self.command(spec);
        info!(
            program = %program,
            target = %spec.target_file.display(),
            "launching agent"
        );
        debug!(prompt_len = spec.prompt.len(), "mission prompt");

        let into_mission_error = |source| CoreError::Mission {
            program: program.clone(),
            source,
        };

        let output = self
            .runner
            .run(&command)
            .await
            .map_err(into_mission_error)?
            .ensure_success(program)
            .map_err(into_mission_error)?;

        Ok(MissionResult {
            success: true,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_agent_exec::{CommandOutput, ExecError, ExecResult};
    use std::sync::Mutex;

    struct ScriptedRunner {
        result: Mutex<Option<ExecResult<CommandOutput>>>,
        calls: Mutex<Vec<CommandSpec>>,
    }

    impl ScriptedRunner {
        fn new(result: ExecResult<CommandOutput>) -> Self {
            Self {
                result: Mutex::new(Some(result)),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        async fn run(&self, spec: &CommandSpec) -> ExecResult<CommandOutput> {
            self.calls.lock().unwrap().push(spec.clone());
            self.result.lock().unwrap().take().unwrap()
        }
    }

    fn mission() -> MissionSpec {
        MissionSpec {
            prompt: "update the changelog".to_string(),
            target_file: "CHANGELOG.md".into(),
        }
    }

    #[test]
    fn test_command_shape() {
        let runner = ScriptedRunner::new(Ok(CommandOutput::default()));
        let executor = MissionExecutor::new(&runner, AgentSettings::default());

        let command = executor.command(&mission());
        assert_eq!(command.program, "claude");
        assert_eq!(command.args, vec!["-p", "--allowedTools", "Read,Edit"]);
        assert_eq!(command.stdin.as_deref(), Some("update the changelog"));
        assert_eq!(command.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_command_with_prefix_args() {
        let runner = ScriptedRunner::new(Ok(CommandOutput::default()));
        let settings = AgentSettings {
            command: "npx".to_string(),
            prefix_args: vec!["@anthropic-ai/claude-code".to_string()],
        };
        let executor = MissionExecutor::new(&runner, settings);

        let command = executor.command(&mission());
        assert_eq!(command.program, "npx");
        assert_eq!(
            command.args,
            vec!["@anthropic-ai/claude-code", "-p", "--allowedTools", "Read,Edit"]
        );
    }

    #[tokio::test]
    async fn test_execute_success() {
        let runner = ScriptedRunner::new(Ok(CommandOutput::success_with("Done")));
        let executor = MissionExecutor::new(&runner, AgentSettings::default());

        let result = executor.execute(&mission()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "Done");
        assert_eq!(runner.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_non_zero_exit() {
        let runner = ScriptedRunner::new(Ok(CommandOutput::failure_with(1, "rate limited")));
        let executor = MissionExecutor::new(&runner, AgentSettings::default());

        let err = executor.execute(&mission()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("claude -p execution failed: "));
        assert!(message.contains("rate limited"));
        assert!(!err.is_agent_missing());
    }

    #[tokio::test]
    async fn test_execute_timeout() {
        let runner = ScriptedRunner::new(Err(ExecError::TimedOut {
            program: "claude".to_string(),
            timeout: MISSION_TIMEOUT,
        }));
        let executor = MissionExecutor::new(&runner, AgentSettings::default());

        let err = executor.execute(&mission()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "claude -p execution failed: claude timed out after 60s"
        );
    }

    #[tokio::test]
    async fn test_execute_missing_binary() {
        let runner = ScriptedRunner::new(Err(ExecError::NotFound {
            program: "claude".to_string(),
        }));
        let executor = MissionExecutor::new(&runner, AgentSettings::default());

        let err = executor.execute(&mission()).await.unwrap_err();
        assert!(err.is_agent_missing());
    }
}
