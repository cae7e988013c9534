//! Default configuration values

/// Default build output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Name of the optional project configuration file
pub const CONFIG_FILE_NAME: &str = "mediarepo-build.toml";

/// Tauri CLI version that gets pinned when tooling installation is enabled
pub const TAURI_CLI_VERSION: &str = "1.0.0-rc.5";

/// Daemon project directory, relative to the project root
pub const DAEMON_DIR: &str = "mediarepo-daemon";

/// UI project directory, relative to the project root
pub const UI_DIR: &str = "mediarepo-ui";

/// Daemon executable name (without platform suffix)
pub const DAEMON_BINARY: &str = "mediarepo-daemon";

/// UI executable name (without platform suffix)
pub const UI_BINARY: &str = "mediarepo-ui";

/// Tauri crate directory inside the UI project
pub const UI_TAURI_DIR: &str = "src-tauri";

/// Name of the Tauri bundle output directory
pub const UI_BUNDLE_DIR: &str = "bundle";
