//! External process execution
//!
//! Commands are described as data ([`CommandSpec`]) and spawned directly,
//! never through a shell, so arguments need no quoting. Bare program names
//! are resolved on `PATH` with the same lookup the dependency checks use, so
//! Windows `.cmd` shims such as `npm.cmd` are spawned by their full path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::BuildError;

/// An external command: program, ordered arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path
    pub program: String,
    /// Arguments in order
    pub args: Vec<String>,
    /// Working directory (the current directory if unset)
    pub working_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Working directory, if any
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of a finished external command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code reported by the process
    pub exit_code: i32,
    /// Whether the process exited successfully
    pub succeeded: bool,
}

impl CommandResult {
    /// A successful result
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            succeeded: true,
        }
    }
}

/// Runs external commands
///
/// Implementations must fail with [`BuildError::ExternalCommand`] when the
/// command exits unsuccessfully. Failures are never retried.
pub trait CommandRunner {
    /// Run a command to completion
    fn run(&self, command: &CommandSpec) -> Result<CommandResult, BuildError>;
}

/// Runs commands as child processes with inherited stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult, BuildError> {
        match command.working_dir() {
            Some(dir) => tracing::info!("Running: {command} (in {})", dir.display()),
            None => tracing::info!("Running: {command}"),
        }

        let program = resolve_program(&command.program);
        tracing::debug!("Resolved {} to {}", command.program, program.display());

        let mut child = Command::new(&program);
        child.args(&command.args);
        if let Some(dir) = command.working_dir() {
            child.current_dir(dir);
        }

        let status = child.status().map_err(|e| BuildError::CommandSpawn {
            command: command.to_string(),
            error: e.to_string(),
        })?;

        if !status.success() {
            return Err(BuildError::ExternalCommand {
                command: command.to_string(),
                exit_code: status.code(),
            });
        }

        Ok(CommandResult {
            exit_code: status.code().unwrap_or(0),
            succeeded: true,
        })
    }
}

/// Full path of the executable to spawn for `program`
///
/// Names containing a path separator are used as given. Bare names are
/// looked up on `PATH` honouring `PATHEXT`; a name that cannot be found is
/// returned unchanged so spawning reports the failure.
pub fn resolve_program(program: &str) -> PathBuf {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.to_path_buf();
    }
    which::which(program).unwrap_or_else(|_| path.to_path_buf())
}
