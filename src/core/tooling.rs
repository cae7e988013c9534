//! Tool requirements per component
//!
//! The lists are static and ordered; order only affects log output.

use crate::core::component::Component;
use crate::infra::platform::Host;
use crate::infra::process::CommandSpec;

/// Command that installs a missing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallCommand {
    /// Program to run
    pub program: &'static str,
    /// Arguments in order
    pub args: &'static [&'static str],
}

impl InstallCommand {
    /// Build the runnable command
    pub fn to_command(&self) -> CommandSpec {
        CommandSpec::new(self.program).args(self.args.iter().copied())
    }
}

/// An external executable a component needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRequirement {
    /// Executable name
    pub name: &'static str,
    /// How to install it, if it can be installed automatically
    pub install: Option<InstallCommand>,
    /// Only required on non-Windows hosts
    pub unix_only: bool,
}

impl ToolRequirement {
    /// A tool that must already be present
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            install: None,
            unix_only: false,
        }
    }

    /// A tool that can be installed when missing
    pub const fn installable(name: &'static str, install: InstallCommand) -> Self {
        Self {
            name,
            install: Some(install),
            unix_only: false,
        }
    }

    /// Restrict the requirement to non-Windows hosts
    #[must_use]
    pub const fn unix_only(mut self) -> Self {
        self.unix_only = true;
        self
    }

    /// Whether the tool can be installed automatically
    pub const fn is_installable(&self) -> bool {
        self.install.is_some()
    }

    /// Whether the requirement applies on `host`
    pub const fn applies_to(&self, host: Host) -> bool {
        !(self.unix_only && host.is_windows())
    }
}

/// `npm install -g yarn`
pub const INSTALL_YARN: InstallCommand = InstallCommand {
    program: "npm",
    args: &["install", "-g", "yarn"],
};

/// `npm install -g @angular/cli`
pub const INSTALL_ANGULAR_CLI: InstallCommand = InstallCommand {
    program: "npm",
    args: &["install", "-g", "@angular/cli"],
};

/// Tools required to build the daemon
pub const DAEMON_TOOLING: &[ToolRequirement] = &[
    ToolRequirement::required("clang"),
    ToolRequirement::required("cargo"),
];

/// Tools required to build the UI
pub const UI_TOOLING: &[ToolRequirement] = &[
    ToolRequirement::required("wget").unix_only(),
    ToolRequirement::required("curl").unix_only(),
    ToolRequirement::required("file").unix_only(),
    ToolRequirement::required("clang"),
    ToolRequirement::required("cargo"),
    ToolRequirement::required("node"),
    ToolRequirement::required("npm"),
    ToolRequirement::installable("yarn", INSTALL_YARN),
    ToolRequirement::installable("ng", INSTALL_ANGULAR_CLI),
];

/// Requirements for a component on a host, in check order
///
/// `All` checks the daemon's tools followed by the UI's; shared tools are
/// checked once per component.
pub fn requirements_for(component: Component, host: Host) -> Vec<&'static ToolRequirement> {
    component
        .pipelines()
        .iter()
        .flat_map(|c| match c {
            Component::Daemon => DAEMON_TOOLING,
            Component::Ui | Component::All => UI_TOOLING,
        })
        .filter(|req| req.applies_to(host))
        .collect()
}

/// Command that installs the pinned Tauri CLI version
pub fn tauri_cli_install(version: &str, verbose: bool) -> CommandSpec {
    let cmd = CommandSpec::new("cargo")
        .args(["install", "tauri-cli", "--version"])
        .arg(format!("^{version}"));
    if verbose {
        cmd.arg("--verbose")
    } else {
        cmd
    }
}
