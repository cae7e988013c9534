//! Build command implementation
//!
//! Implements `mediarepo-build build` to check tooling, build the selected
//! components and collect their artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_success, print_warning};
use crate::core::builder::BuildOrchestrator;
use crate::core::component::Component;
use crate::core::configuration::BuildConfiguration;
use crate::infra::platform::Host;
use crate::infra::probe::PathLocator;
use crate::infra::process::SystemRunner;

/// Build options from the command line
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Component to build
    pub component: Component,
    /// Verbose cargo output
    pub verbose: bool,
    /// Output directory override
    pub output: Option<PathBuf>,
    /// Install missing tooling
    pub install_tooling: bool,
    /// UI bundle format override
    pub bundles: Option<Vec<String>>,
    /// Daemon feature override
    pub features: Option<Vec<String>>,
}

impl BuildOptions {
    /// Apply the command-line overrides on top of `config`
    pub fn apply(self, config: BuildConfiguration) -> BuildConfiguration {
        let mut config = config
            .with_verbose(self.verbose)
            .with_install_tooling(self.install_tooling);
        if let Some(output) = self.output {
            config = config.with_output_dir(output);
        }
        if let Some(bundles) = self.bundles {
            config = config.with_ui_bundles(bundles);
        }
        if let Some(features) = self.features {
            config = config.with_daemon_features(features);
        }
        config
    }
}

/// Execute the build command
pub fn execute(config: BuildConfiguration, options: BuildOptions) -> Result<()> {
    let component = options.component;
    if options.bundles.is_some() && component == Component::Daemon {
        print_warning("--bundles only applies to the UI and is ignored for the daemon");
    }
    let config = options.apply(config);

    let runner = SystemRunner::new();
    let locator = PathLocator::new();
    let mut orchestrator = BuildOrchestrator::new(&config, &runner, &locator, Host::current());

    let report = orchestrator
        .run(component)
        .with_context(|| format!("Failed to build {component}"))?;

    print_success(&format!(
        "Build complete: {} artifact(s) in {}",
        report.artifacts.len(),
        config.output_path().display()
    ));
    for artifact in &report.artifacts {
        print_detail(&artifact.display().to_string());
    }

    Ok(())
}
