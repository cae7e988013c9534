//! Build configuration
//!
//! A [`BuildConfiguration`] is built once per invocation and handed to every
//! step by shared reference. It is never mutated after construction.

use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DAEMON_BINARY, DAEMON_DIR, DEFAULT_OUTPUT_DIR, TAURI_CLI_VERSION, UI_BINARY, UI_BUNDLE_DIR,
    UI_DIR, UI_TAURI_DIR,
};
use crate::config::file::FileConfig;
use crate::error::ConfigError;
use crate::infra::platform::Host;

/// Where the component projects live, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Daemon cargo project
    pub daemon_dir: PathBuf,
    /// UI project (contains `package.json` and `src-tauri/`)
    pub ui_dir: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            daemon_dir: PathBuf::from(DAEMON_DIR),
            ui_dir: PathBuf::from(UI_DIR),
        }
    }
}

/// Settings for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Directory all relative paths are resolved against
    pub project_root: PathBuf,
    /// Output directory for collected artifacts
    pub output_dir: PathBuf,
    /// Pass `--verbose` to cargo invocations
    pub verbose: bool,
    /// Install missing installable tools and pin the Tauri CLI
    pub install_tooling: bool,
    /// Restrict the UI bundle formats; `None` builds the defaults
    pub ui_bundles: Option<Vec<String>>,
    /// Cargo features enabled for the daemon
    pub daemon_features: Vec<String>,
    /// Tauri CLI version to pin
    pub tauri_cli_version: String,
    /// Component project locations
    pub layout: ProjectLayout,
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: false,
            install_tooling: false,
            ui_bundles: None,
            daemon_features: Vec::new(),
            tauri_cli_version: TAURI_CLI_VERSION.to_string(),
            layout: ProjectLayout::default(),
        }
    }
}

impl BuildConfiguration {
    /// Create a configuration with default settings for a project root
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    /// Create a configuration from the project config file
    ///
    /// Settings absent from the file keep their defaults. The Tauri CLI pin
    /// must be a valid semver version.
    pub fn from_file(
        project_root: impl Into<PathBuf>,
        file: &FileConfig,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::new(project_root);

        if let Some(dir) = &file.output.dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(version) = &file.tooling.tauri_cli_version {
            config.tauri_cli_version = validate_version("tauri-cli", version)?;
        }
        if let Some(path) = &file.daemon.path {
            config.layout.daemon_dir.clone_from(path);
        }
        if let Some(features) = &file.daemon.features {
            config.daemon_features.clone_from(features);
        }
        if let Some(path) = &file.ui.path {
            config.layout.ui_dir.clone_from(path);
        }
        if let Some(bundles) = &file.ui.bundles {
            config.ui_bundles = Some(bundles.clone());
        }

        Ok(config)
    }

    /// Override the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set verbose cargo output
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable tooling installation
    #[must_use]
    pub fn with_install_tooling(mut self, install: bool) -> Self {
        self.install_tooling = install;
        self
    }

    /// Restrict UI bundle formats
    #[must_use]
    pub fn with_ui_bundles(mut self, bundles: Vec<String>) -> Self {
        self.ui_bundles = Some(bundles);
        self
    }

    /// Set daemon cargo features
    #[must_use]
    pub fn with_daemon_features(mut self, features: Vec<String>) -> Self {
        self.daemon_features = features;
        self
    }

    /// Output directory resolved against the project root
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    /// Daemon project directory resolved against the project root
    pub fn daemon_path(&self) -> PathBuf {
        self.project_root.join(&self.layout.daemon_dir)
    }

    /// UI project directory resolved against the project root
    pub fn ui_path(&self) -> PathBuf {
        self.project_root.join(&self.layout.ui_dir)
    }

    /// Daemon release executable for `host`
    pub fn daemon_executable(&self, host: Host) -> PathBuf {
        release_dir(&self.daemon_path()).join(host.executable_name(DAEMON_BINARY))
    }

    /// UI release executable for `host`
    pub fn ui_executable(&self, host: Host) -> PathBuf {
        self.ui_release_dir().join(host.executable_name(UI_BINARY))
    }

    /// Paths the output directory must never contain
    pub fn protected_paths(&self) -> Vec<PathBuf> {
        vec![self.project_root.clone(), self.daemon_path(), self.ui_path()]
    }

    /// Tauri bundle directory
    pub fn ui_bundle_dir(&self) -> PathBuf {
        self.ui_release_dir().join(UI_BUNDLE_DIR)
    }

    fn ui_release_dir(&self) -> PathBuf {
        release_dir(&self.ui_path().join(UI_TAURI_DIR))
    }
}

fn release_dir(cargo_project: &Path) -> PathBuf {
    cargo_project.join("target").join("release")
}

/// The pin is installed as `^<version>`, so it must form a valid caret
/// requirement, e.g. `1`, `1.0` or `1.0.0-rc.5`.
fn validate_version(tool: &str, version: &str) -> Result<String, ConfigError> {
    semver::VersionReq::parse(&format!("^{version}"))
        .map(|_| version.to_string())
        .map_err(|e| ConfigError::InvalidVersion {
            tool: tool.to_string(),
            version: version.to_string(),
            error: e.to_string(),
        })
}
