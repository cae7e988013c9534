//! Build orchestration logic
//!
//! Drives one build run through its phases:
//!
//! ```text
//! Clean -> Prepared -> { Checking(c) -> Building(c) -> Collecting(c) }* -> Done
//! ```
//!
//! with one check/build/collect pipeline per selected component, daemon
//! first. Any error ends the run in [`Phase::Failed`]. Artifacts collected by
//! an earlier pipeline stay in the output directory.

use std::fmt;
use std::path::PathBuf;

use crate::core::artifact::{self, ArtifactSpec};
use crate::core::check::{CheckReport, DependencyChecker};
use crate::core::clean::clean_output;
use crate::core::component::Component;
use crate::core::configuration::BuildConfiguration;
use crate::error::BuildError;
use crate::infra::filesystem;
use crate::infra::platform::Host;
use crate::infra::probe::ToolLocator;
use crate::infra::process::{CommandRunner, CommandSpec};

/// Phase of a build run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Removing previous output
    Clean,
    /// Output directory recreated
    Prepared,
    /// Verifying a component's tooling
    Checking(Component),
    /// Running a component's build commands
    Building(Component),
    /// Copying a component's artifacts
    Collecting(Component),
    /// All pipelines finished
    Done,
    /// A step failed
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Clean => write!(f, "clean"),
            Phase::Prepared => write!(f, "prepared"),
            Phase::Checking(c) => write!(f, "checking({c})"),
            Phase::Building(c) => write!(f, "building({c})"),
            Phase::Collecting(c) => write!(f, "collecting({c})"),
            Phase::Done => write!(f, "done"),
            Phase::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a successful build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Components built, in order
    pub components: Vec<Component>,
    /// Dependency check outcome per component
    pub checks: Vec<(Component, CheckReport)>,
    /// Destination of every collected artifact
    pub artifacts: Vec<PathBuf>,
}

/// Commands that build `component`, in order
pub fn build_steps(
    component: Component,
    config: &BuildConfiguration,
) -> Vec<CommandSpec> {
    match component {
        Component::Daemon => daemon_steps(config),
        Component::Ui => ui_steps(config),
        Component::All => {
            let mut steps = daemon_steps(config);
            steps.extend(ui_steps(config));
            steps
        }
    }
}

fn cargo(config: &BuildConfiguration, args: &[&str]) -> CommandSpec {
    let cmd = CommandSpec::new("cargo").args(args.iter().copied());
    if config.verbose {
        cmd.arg("--verbose")
    } else {
        cmd
    }
}

fn daemon_steps(config: &BuildConfiguration) -> Vec<CommandSpec> {
    let dir = config.daemon_path();

    let mut build_args = vec!["build", "--release", "--frozen"];
    let features = config.daemon_features.join(",");
    if !features.is_empty() {
        build_args.extend(["--features", features.as_str()]);
    }

    vec![
        cargo(config, &["fetch"]).current_dir(&dir),
        cargo(config, &build_args).current_dir(&dir),
    ]
}

fn ui_steps(config: &BuildConfiguration) -> Vec<CommandSpec> {
    let dir = config.ui_path();

    let mut build_args = vec!["tauri", "build"];
    if let Some(bundles) = &config.ui_bundles {
        if !bundles.is_empty() {
            build_args.push("--bundles");
            build_args.extend(bundles.iter().map(String::as_str));
        }
    }

    vec![
        CommandSpec::new("yarn").arg("install").current_dir(&dir),
        cargo(config, &build_args).current_dir(&dir),
    ]
}

/// Artifacts `component` produces on `host`, in collection order
pub fn artifacts_for(
    component: Component,
    config: &BuildConfiguration,
    host: Host,
) -> Vec<ArtifactSpec> {
    component
        .pipelines()
        .iter()
        .flat_map(|c| match c {
            Component::Daemon => vec![ArtifactSpec::file(config.daemon_executable(host))],
            Component::Ui | Component::All => vec![
                ArtifactSpec::file(config.ui_executable(host)),
                ArtifactSpec::directory(config.ui_bundle_dir()),
            ],
        })
        .collect()
}

/// Runs the clean, check, build and collect workflow
pub struct BuildOrchestrator<'a> {
    config: &'a BuildConfiguration,
    runner: &'a dyn CommandRunner,
    checker: DependencyChecker<'a>,
    host: Host,
    history: Vec<Phase>,
}

impl<'a> BuildOrchestrator<'a> {
    /// Create an orchestrator
    pub fn new(
        config: &'a BuildConfiguration,
        runner: &'a dyn CommandRunner,
        locator: &'a dyn ToolLocator,
        host: Host,
    ) -> Self {
        Self {
            config,
            runner,
            checker: DependencyChecker::new(locator, runner, host),
            host,
            history: Vec::new(),
        }
    }

    /// Phases entered so far, in order
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    /// Current phase, if the run has started
    pub fn phase(&self) -> Option<Phase> {
        self.history.last().copied()
    }

    /// Build `component`
    ///
    /// The output directory is removed and recreated exactly once, before any
    /// pipeline starts. Pipelines run sequentially; the first error aborts the
    /// run without rolling back artifacts already collected.
    pub fn run(&mut self, component: Component) -> Result<BuildReport, BuildError> {
        let result = self.execute(component);
        if let Err(e) = &result {
            tracing::debug!("Build failed during {}: {e}", self.current_phase_name());
            self.enter(Phase::Failed);
        }
        result
    }

    fn execute(&mut self, component: Component) -> Result<BuildReport, BuildError> {
        let output = self.config.output_path();
        let mut report = BuildReport::default();

        self.enter(Phase::Clean);
        clean_output(&output, &self.config.protected_paths())?;

        self.enter(Phase::Prepared);
        filesystem::create_dir_all(&output)?;

        for &pipeline in component.pipelines() {
            self.enter(Phase::Checking(pipeline));
            let check = self.checker.check_component(pipeline, self.config)?;
            report.checks.push((pipeline, check));

            self.enter(Phase::Building(pipeline));
            tracing::info!("Building {pipeline}");
            for step in build_steps(pipeline, self.config) {
                self.runner.run(&step)?;
            }

            self.enter(Phase::Collecting(pipeline));
            for spec in artifacts_for(pipeline, self.config, self.host) {
                report.artifacts.push(artifact::collect(&spec, &output)?);
            }
            report.components.push(pipeline);
        }

        self.enter(Phase::Done);
        tracing::info!("Build complete");
        Ok(report)
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!("Entering phase {phase}");
        self.history.push(phase);
    }

    fn current_phase_name(&self) -> String {
        self.phase()
            .map_or_else(|| "startup".to_string(), |p| p.to_string())
    }
}
