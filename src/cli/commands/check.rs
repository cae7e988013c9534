//! Check command implementation
//!
//! Verifies the tooling for every component without building anything.

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_info, print_success};
use crate::core::check::{CheckReport, DependencyChecker, ToolStatus};
use crate::core::component::Component;
use crate::core::configuration::BuildConfiguration;
use crate::infra::platform::Host;
use crate::infra::probe::PathLocator;
use crate::infra::process::SystemRunner;

/// Execute the check command
pub fn execute(config: &BuildConfiguration) -> Result<()> {
    let runner = SystemRunner::new();
    let locator = PathLocator::new();
    let checker = DependencyChecker::new(&locator, &runner, Host::current());

    let report = checker
        .check_component(Component::All, config)
        .context("Dependency check failed")?;

    print_report(&report);
    print_success("All checks passed");
    Ok(())
}

fn print_report(report: &CheckReport) {
    for (tool, status) in &report.tools {
        match status {
            ToolStatus::Found => print_detail(tool),
            ToolStatus::Installed => print_detail(&format!("{tool} (installed)")),
        }
    }
    if let Some(version) = &report.pinned_tauri_cli {
        print_info(&format!("tauri-cli pinned to ^{version}"));
    }
}
