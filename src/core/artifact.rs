//! Artifact collection
//!
//! Copies build outputs into the shared output directory. Directories are
//! merged into `<output>/<name>`, files are copied to `<output>/<file name>`.

use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::infra::filesystem;

/// Kind of build output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single file, e.g. an executable
    File,
    /// A directory tree, e.g. installer bundles
    Directory,
}

/// One build output to collect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Where the build leaves the artifact
    pub source: PathBuf,
    /// File or directory
    pub kind: ArtifactKind,
}

impl ArtifactSpec {
    /// A single-file artifact
    pub fn file(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            kind: ArtifactKind::File,
        }
    }

    /// A directory artifact
    pub fn directory(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            kind: ArtifactKind::Directory,
        }
    }

    /// Whether this is a directory artifact
    pub fn is_directory(&self) -> bool {
        self.kind == ArtifactKind::Directory
    }
}

/// Copy an artifact into `output_dir`
///
/// Creates `output_dir` if needed and returns the destination path. A missing
/// source is an error, since it means the build did not produce what it
/// promised. Directory collection merges: existing files are overwritten and
/// files only present at the destination are kept.
pub fn collect(spec: &ArtifactSpec, output_dir: &Path) -> Result<PathBuf, BuildError> {
    tracing::info!("Storing {}", spec.source.display());

    if !spec.source.exists() {
        return Err(BuildError::ArtifactNotFound {
            path: spec.source.clone(),
        });
    }

    filesystem::create_dir_all(output_dir)?;

    let name = spec
        .source
        .file_name()
        .ok_or_else(|| BuildError::ArtifactNotFound {
            path: spec.source.clone(),
        })?;
    let destination = output_dir.join(name);

    match spec.kind {
        ArtifactKind::Directory => filesystem::copy_tree(&spec.source, &destination)?,
        ArtifactKind::File => filesystem::copy_file(&spec.source, &destination)?,
    }

    tracing::debug!("Stored {}", destination.display());
    Ok(destination)
}
