//! mediarepo-build - Build the mediarepo daemon and UI
//!
//! Entry point for the mediarepo-build command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mediarepo_build::cli::output::display_error;
use mediarepo_build::cli::{exit_code, Cli};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides the level chosen by the flags
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(exit_code(&e));
    }
}
