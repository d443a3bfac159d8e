//! External command execution
//!
//! Every child process is located on PATH first so a missing tool surfaces as
//! `ToolNotFound` instead of a spawn error, then run to completion with no
//! timeout.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::{Error, Result};

/// Resolve `program` on PATH
///
/// `purpose` completes the "please install <tool> to ..." hint.
pub fn locate(program: &str, purpose: &'static str) -> Result<PathBuf> {
    which::which(program).map_err(|_| Error::tool_not_found(program, purpose))
}

/// Command builder for a single external process
#[derive(Clone, Debug)]
pub struct CommandBuilder {
    program: PathBuf,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    env_vars: Vec<(String, String)>,
}

/// Command execution result
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub success: bool,
    pub duration: Duration,
}

impl CommandBuilder {
    /// Create a new command builder for a binary
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            env_vars: Vec::new(),
        }
    }

    /// Add a command argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set working directory (defaults to the process working directory)
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set an environment variable for the child
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    #[cfg(test)]
    pub(crate) fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Human-readable command line, e.g. `gh repo delete demo --yes`
    pub fn display(&self) -> String {
        let program = self
            .program
            .file_name()
            .unwrap_or_else(|| OsStr::new(""))
            .to_string_lossy();

        std::iter::once(program.into_owned())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    fn finish(&self, output: std::io::Result<Output>, start: Instant) -> Result<CommandResult> {
        let output = output.map_err(|e| Error::command_failed(self.display(), e.to_string()))?;

        let result = CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            success: output.status.success(),
            duration: start.elapsed(),
        };

        debug!(
            "`{}` exited with {:?} after {:?}",
            self.display(),
            result.exit_code,
            result.duration
        );

        Ok(result)
    }

    /// Execute the command and capture stdout and stderr
    ///
    /// A non-zero exit is reported through `CommandResult::success`, not as an error.
    pub fn execute(&self) -> Result<CommandResult> {
        debug!("Running: {}", self.display());
        let start = Instant::now();
        let output = self.command().output();
        self.finish(output, start)
    }

    /// Execute the command, failing on non-zero exit
    pub fn run(&self) -> Result<CommandResult> {
        self.execute()?.into_success(self)
    }

    /// Execute with stdout passed through to the user, failing on non-zero exit
    ///
    /// stderr is still captured so it can be carried in the error.
    pub fn run_streaming(&self) -> Result<CommandResult> {
        debug!("Running: {}", self.display());
        let start = Instant::now();
        let output = self
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output();
        self.finish(output, start)?.into_success(self)
    }
}

impl CommandResult {
    fn into_success(self, cmd: &CommandBuilder) -> Result<Self> {
        if self.success {
            return Ok(self);
        }

        let status = match self.exit_code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        let detail = match stderr.lines().last() {
            Some(line) if !line.trim().is_empty() => format!("{}: {}", status, line.trim()),
            _ => status,
        };

        Err(Error::command_failed(cmd.display(), detail))
    }
}
