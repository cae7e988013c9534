//! Dependency verification
//!
//! Probes each tool a component needs, in declared order, and stops at the
//! first tool that is missing and cannot be installed. With tooling
//! installation enabled, installable tools are installed and re-probed, and
//! the Tauri CLI is always re-installed at its pinned version.

use crate::core::component::Component;
use crate::core::configuration::BuildConfiguration;
use crate::core::tooling::{requirements_for, tauri_cli_install, ToolRequirement};
use crate::error::BuildError;
use crate::infra::platform::Host;
use crate::infra::probe::{ToolLocator, ToolProbe};
use crate::infra::process::CommandRunner;

/// How a required tool was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// Already on the search path
    Found,
    /// Installed during the check
    Installed,
}

/// Outcome of a successful dependency check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Tools checked, in order
    pub tools: Vec<(String, ToolStatus)>,
    /// Tauri CLI version pinned during the check
    pub pinned_tauri_cli: Option<String>,
}

impl CheckReport {
    /// Names of tools that had to be installed
    pub fn installed(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|(_, status)| *status == ToolStatus::Installed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Verifies and optionally installs component tooling
pub struct DependencyChecker<'a> {
    probe: ToolProbe<'a>,
    runner: &'a dyn CommandRunner,
    host: Host,
}

impl<'a> DependencyChecker<'a> {
    /// Create a checker for `host`
    pub fn new(locator: &'a dyn ToolLocator, runner: &'a dyn CommandRunner, host: Host) -> Self {
        Self {
            probe: ToolProbe::new(locator, runner),
            runner,
            host,
        }
    }

    /// Check every tool `component` needs
    ///
    /// Fails with [`BuildError::MissingDependency`] on the first missing tool
    /// that cannot be installed, or with the install command's error if an
    /// install fails.
    pub fn check_component(
        &self,
        component: Component,
        config: &BuildConfiguration,
    ) -> Result<CheckReport, BuildError> {
        tracing::info!("Checking {component} tooling");
        let mut report = CheckReport::default();

        for requirement in requirements_for(component, self.host) {
            let status = self.check_requirement(requirement, config)?;
            report.tools.push((requirement.name.to_string(), status));
        }

        if config.install_tooling && component != Component::Daemon {
            self.pin_tauri_cli(config)?;
            report.pinned_tauri_cli = Some(config.tauri_cli_version.clone());
        }

        Ok(report)
    }

    fn check_requirement(
        &self,
        requirement: &ToolRequirement,
        config: &BuildConfiguration,
    ) -> Result<ToolStatus, BuildError> {
        if self.probe.probe(requirement.name) {
            return Ok(ToolStatus::Found);
        }

        let missing = || BuildError::MissingDependency {
            tool: requirement.name.to_string(),
        };

        let Some(install) = requirement.install else {
            return Err(missing());
        };
        if !config.install_tooling {
            tracing::warn!(
                "{} can be installed automatically with --install-tooling",
                requirement.name
            );
            return Err(missing());
        }

        tracing::info!("Installing {}...", requirement.name);
        self.runner.run(&install.to_command())?;

        if self.probe.probe(requirement.name) {
            Ok(ToolStatus::Installed)
        } else {
            Err(missing())
        }
    }

    /// Always re-installs the Tauri CLI so a known-good version is used,
    /// whether or not a CLI is already present.
    fn pin_tauri_cli(&self, config: &BuildConfiguration) -> Result<(), BuildError> {
        tracing::info!("Pinning tauri-cli to ^{}", config.tauri_cli_version);
        self.runner
            .run(&tauri_cli_install(&config.tauri_cli_version, config.verbose))?;
        Ok(())
    }
}
