//! Clean logic
//!
//! Removes the build output directory.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Remove the output directory and everything in it
///
/// Refuses to touch an output directory that is, or contains, one of the
/// `protected` paths (the project root and component directories).
///
/// # Returns
///
/// * `Ok(true)` - The directory existed and was removed
/// * `Ok(false)` - There was nothing to remove
/// * `Err(FilesystemError)` - If the directory is protected or removal fails
pub fn clean_output(output_dir: &Path, protected: &[PathBuf]) -> Result<bool, FilesystemError> {
    if has_build_output(output_dir) {
        ensure_removable(output_dir, protected)?;
    }

    let removed = filesystem::remove_dir_all(output_dir)?;
    if removed {
        tracing::info!("Removed {}", output_dir.display());
    } else {
        tracing::debug!("{} does not exist, nothing to clean", output_dir.display());
    }
    Ok(removed)
}

/// Check if there is build output to clean
pub fn has_build_output(output_dir: &Path) -> bool {
    output_dir.exists()
}

fn ensure_removable(output_dir: &Path, protected: &[PathBuf]) -> Result<(), FilesystemError> {
    let output = canonical(output_dir);
    for path in protected {
        if canonical(path).starts_with(&output) {
            return Err(FilesystemError::ProtectedPath {
                path: output_dir.to_path_buf(),
                protected: path.clone(),
            });
        }
    }
    Ok(())
}

// Paths that do not exist yet are compared as given.
fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
