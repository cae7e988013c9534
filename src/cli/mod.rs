//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no workflow logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use crate::error::BuildError;
use commands::Commands;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit:  ",
    env!("VERGEN_GIT_SHA"),
    "\nbuilt:   ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\ntarget:  ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    "\nrustc:   ",
    env!("VERGEN_RUSTC_SEMVER"),
);

/// mediarepo-build - Build the mediarepo daemon and UI
///
/// Checks required toolchains, builds each component and collects the
/// binaries and bundles into one output directory.
#[derive(Parser, Debug)]
#[command(name = "mediarepo-build")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing the daemon and UI projects
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Configuration file, relative to the current directory
    /// (default: <project-dir>/mediarepo-build.toml)
    #[arg(long, global = true, value_name = "FILE", env = "MEDIAREPO_BUILD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level selected by the command-line flags
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::WARN
        } else if matches!(self.command, Some(Commands::Build { verbose: true, .. })) {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let cwd = std::env::current_dir()?;
        let project_dir = self.project_dir.map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
        let config = self.config.map(|path| cwd.join(path));
        cmd.run(&project_dir, config.as_deref())
    }
}

/// Process exit code for a failed command
///
/// External command failures propagate their own exit code; everything
/// else exits with 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<BuildError>()
        .map_or(1, BuildError::exit_code)
}
