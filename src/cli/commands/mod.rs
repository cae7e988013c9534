//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod clean;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::file::FileConfig;
use crate::core::component::Component;
use crate::core::configuration::BuildConfiguration;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the daemon, the UI, or both
    Build {
        /// Component to build
        #[arg(value_enum, default_value_t = Component::All)]
        component: Component,

        /// Pass --verbose to cargo and log debug output
        #[arg(long)]
        verbose: bool,

        /// Build output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Install missing tooling and pin the Tauri CLI version
        #[arg(long)]
        install_tooling: bool,

        /// UI bundle formats to build (all default formats if omitted)
        #[arg(long, num_args = 1.., value_name = "FORMAT")]
        bundles: Option<Vec<String>>,

        /// Cargo features to enable for the daemon
        #[arg(long, num_args = 1.., value_delimiter = ',', value_name = "FEATURE")]
        features: Option<Vec<String>>,
    },

    /// Check build dependencies for both components
    Check {
        /// Install dependencies that can be installed automatically
        #[arg(long)]
        install: bool,
    },

    /// Remove the build output directory
    Clean {
        /// Build output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, project_dir: &Path, config_file: Option<&Path>) -> Result<()> {
        match self {
            Self::Build {
                component,
                verbose,
                output,
                install_tooling,
                bundles,
                features,
            } => {
                let config = load_configuration(project_dir, config_file)?;
                let options = build::BuildOptions {
                    component,
                    verbose,
                    output,
                    install_tooling,
                    bundles,
                    features,
                };
                build::execute(config, options)
            }
            Self::Check { install } => {
                let config = load_configuration(project_dir, config_file)?;
                check::execute(&config.with_install_tooling(install))
            }
            Self::Clean { output } => {
                let output = match output {
                    Some(dir) => Some(dir),
                    None => load_output_dir(project_dir, config_file)?,
                };
                let config = BuildConfiguration::new(project_dir);
                let config = match output {
                    Some(dir) => config.with_output_dir(dir),
                    None => config,
                };
                clean::execute(&config)
            }
        }
    }
}

/// Load the project configuration file and apply its settings
fn load_configuration(project_dir: &Path, config_file: Option<&Path>) -> Result<BuildConfiguration> {
    let file = load_file(project_dir, config_file)?;
    BuildConfiguration::from_file(project_dir, &file).context("Invalid configuration")
}

/// Output directory from the configuration file, ignoring its other settings
fn load_output_dir(project_dir: &Path, config_file: Option<&Path>) -> Result<Option<PathBuf>> {
    Ok(load_file(project_dir, config_file)?.output.dir)
}

fn load_file(project_dir: &Path, config_file: Option<&Path>) -> Result<FileConfig> {
    FileConfig::load(project_dir, config_file)
        .with_context(|| format!("Failed to load configuration for {}", project_dir.display()))
}
