//! Command description, captured output and the runner trait.

use std::future::Future;
use std::time::Duration;

use crate::{ExecError, ExecResult};

/// A process invocation: program, arguments, optional stdin and timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run, looked up on `PATH`.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Text written to the program's standard input, which is then closed.
    pub stdin: Option<String>,

    /// Wall-clock limit after which the program is killed.
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    /// Creates a spec for the given program with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
            timeout: None,
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the text fed to standard input.
    #[must_use]
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Sets the execution timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// The exit code, or `None` if the process was killed by a signal.
    pub status: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Creates a successful output with the given stdout.
    #[must_use]
    pub fn success_with(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Creates a failed output with the given exit code and stderr.
    #[must_use]
    pub fn failure_with(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns true if the process exited with status 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Returns the stdout of a successful run, or an [`ExecError::Failed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the process exited unsuccessfully.
    pub fn ensure_success(self, program: &str) -> ExecResult<String> {
        if self.success() {
            Ok(self.stdout)
        } else {
            Err(ExecError::Failed {
                program: program.to_string(),
                status: self.status,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs external programs.
///
/// Implementations report a non-zero exit through [`CommandOutput::status`]
/// rather than as an error; only failures to run the program at all (missing
/// binary, timeout, broken pipes) are errors.
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion and captures its output.
    fn run(&self, spec: &CommandSpec) -> impl Future<Output = ExecResult<CommandOutput>> + Send;
}
