//! Project configuration file
//!
//! Reads `mediarepo-build.toml` from the project root. Every setting is
//! optional; command-line flags take precedence over the file, and the file
//! takes precedence over [`crate::config::defaults`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAME;
use crate::error::ConfigError;

/// Contents of `mediarepo-build.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputSection,

    /// Tool version pins
    #[serde(default)]
    pub tooling: ToolingSection,

    /// Daemon component settings
    #[serde(default)]
    pub daemon: DaemonSection,

    /// UI component settings
    #[serde(default)]
    pub ui: UiSection,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Build output directory
    pub dir: Option<PathBuf>,
}

/// `[tooling]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolingSection {
    /// Tauri CLI version to pin when installing tooling
    pub tauri_cli_version: Option<String>,
}

/// `[daemon]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonSection {
    /// Daemon project directory
    pub path: Option<PathBuf>,

    /// Cargo features enabled for the daemon build
    pub features: Option<Vec<String>>,
}

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    /// UI project directory
    pub path: Option<PathBuf>,

    /// Bundle formats to produce
    pub bundles: Option<Vec<String>>,
}

impl FileConfig {
    /// Load the configuration for a project
    ///
    /// With an explicit path the file must exist; a relative explicit path is
    /// taken relative to the current directory, not `project_root`. Without
    /// one, the default `mediarepo-build.toml` in `project_root` is used if
    /// present.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from_path(path)
            }
            None => Self::load_from_path(&project_root.join(CONFIG_FILE_NAME)),
        }
    }

    /// Load configuration from a specific path
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("Loaded config file {}", path.display());
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}
