//! Clean command implementation
//!
//! Implements `mediarepo-build clean` to remove the build output directory.

use anyhow::{Context, Result};

use crate::cli::output::print_success;
use crate::core::clean::{clean_output, has_build_output};
use crate::core::configuration::BuildConfiguration;

/// Execute the clean command
pub fn execute(config: &BuildConfiguration) -> Result<()> {
    let output_dir = config.output_path();

    if !has_build_output(&output_dir) {
        print_success("Nothing to clean");
        return Ok(());
    }

    clean_output(&output_dir, &config.protected_paths())
        .with_context(|| format!("Failed to clean {}", output_dir.display()))?;
    print_success(&format!("Cleaned {}", output_dir.display()));
    Ok(())
}
