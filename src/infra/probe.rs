//! Tool presence probing
//!
//! A tool counts as present when its executable is on the search path.
//! Running `<tool> --version` afterwards is only for operator visibility.

use std::path::PathBuf;

use crate::infra::process::{CommandRunner, CommandSpec};

/// Locates executables by name
pub trait ToolLocator {
    /// Full path of the executable, or `None` if it is not on the search path
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Looks tools up on the process `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl PathLocator {
    /// Create a new `PATH` locator
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Checks whether tools are available
pub struct ToolProbe<'a> {
    locator: &'a dyn ToolLocator,
    runner: &'a dyn CommandRunner,
}

impl<'a> ToolProbe<'a> {
    /// Create a probe from a locator and a runner for the version query
    pub fn new(locator: &'a dyn ToolLocator, runner: &'a dyn CommandRunner) -> Self {
        Self { locator, runner }
    }

    /// Whether `name` is available
    ///
    /// Never fails: a missing tool is an expected outcome. A failing
    /// `--version` query is logged and does not change the result.
    pub fn probe(&self, name: &str) -> bool {
        tracing::info!("Checking {name}...");

        let Some(path) = self.locator.locate(name) else {
            tracing::warn!("{name} not found");
            return false;
        };
        tracing::debug!("Found {name} at {}", path.display());

        if let Err(e) = self.runner.run(&CommandSpec::new(name).arg("--version")) {
            tracing::warn!("{name} is on PATH but its version query failed: {e}");
        }
        true
    }
}
