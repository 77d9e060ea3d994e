//! Process execution backed by `tokio::process`.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{CommandOutput, CommandRunner, CommandSpec, ExecError, ExecResult};

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    workdir: Option<PathBuf>,
}

impl SystemRunner {
    /// Creates a runner that uses the current working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working directory for launched processes.
    #[must_use]
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> ExecResult<CommandOutput> {
        let program = spec.program.as_str();
        debug!(program, args = ?spec.args, timeout = ?spec.timeout, "running command");

        let mut cmd = Command::new(program);
        cmd.args(&spec.args)
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|e| ExecError::spawn(program, e))?;

        if let (Some(input), Some(mut pipe)) = (spec.stdin.clone(), child.stdin.take()) {
            // Dropping the pipe at the end of the task closes the child's stdin.
            tokio::spawn(async move {
                if let Err(e) = pipe.write_all(input.as_bytes()).await {
                    debug!("stdin closed early: {e}");
                }
            });
        }

        let wait = child.wait_with_output();
        let output = match spec.timeout {
            Some(limit) => tokio::time::timeout(limit, wait).await.map_err(|_| {
                warn!(program, timeout = ?limit, "command timed out");
                ExecError::TimedOut {
                    program: program.to_string(),
                    timeout: limit,
                }
            })?,
            None => wait.await,
        }
        .map_err(|source| ExecError::Io {
            program: program.to_string(),
            source,
        })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            warn!(
                program,
                status = ?result.status,
                stderr = %result.stderr.trim(),
                "command exited unsuccessfully"
            );
        }

        Ok(result)
    }
}
