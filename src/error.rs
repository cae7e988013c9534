//! Error types for mediarepo-build
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to copy a file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Output directory would remove the project itself
    #[error("Refusing to remove '{path}': it contains '{protected}'")]
    ProtectedPath { path: PathBuf, protected: PathBuf },

    /// Failed to walk a directory tree
    #[error("Failed to read directory tree '{path}': {error}")]
    Walk { path: PathBuf, error: String },
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Pinned tool version is not valid semver
    #[error("Invalid version '{version}' for {tool}: {error}")]
    InvalidVersion {
        tool: String,
        version: String,
        error: String,
    },
}

/// Build errors
///
/// Every variant is fatal: nothing in the workflow catches and retries.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Required tool is absent and cannot be installed in this context
    #[error("Missing dependency: '{tool}' not found in PATH")]
    MissingDependency { tool: String },

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed with {}", describe_exit(.exit_code))]
    ExternalCommand {
        command: String,
        exit_code: Option<i32>,
    },

    /// External command could not be started at all
    #[error("Failed to run '{command}': {error}")]
    CommandSpawn { command: String, error: String },

    /// Expected build output is missing after a successful build
    #[error("Artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    /// Process exit code to report for this error
    ///
    /// A failing external command propagates its own exit code; every other
    /// failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ExternalCommand {
                exit_code: Some(code),
                ..
            } if (1..=255).contains(code) => *code,
            _ => 1,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
