//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a temporary
//! mediarepo checkout and a fake toolchain of shell scripts that stands in
//! for cargo, yarn and friends.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Every tool the daemon or UI pipeline probes for
pub const ALL_TOOLS: &[&str] = &[
    "wget", "curl", "file", "clang", "cargo", "node", "npm", "yarn", "ng",
];

/// Test project context
///
/// Creates a temporary directory laid out like a mediarepo checkout, with a
/// separate `bin/` directory for fake tools that becomes the only entry on
/// `PATH` when the binary runs.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary directory holding fake tools
    pub bin: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            bin: TempDir::new().expect("Failed to create bin directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Create the directories the fake builds write their outputs into
    ///
    /// The fake tools only use shell builtins, so they cannot create
    /// directories themselves.
    pub fn create_build_dirs(&self) {
        self.create_dir("mediarepo-daemon/target/release");
        self.create_dir("mediarepo-ui/src-tauri/target/release/bundle/deb");
    }

    /// Install a fake tool whose body runs under `/bin/sh`
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// Install tools that accept any arguments and succeed
    #[cfg(unix)]
    pub fn install_tools(&self, names: &[&str]) {
        for name in names {
            self.install_tool(name, &format!("echo \"{name} 1.0.0\"\nexit 0"));
        }
    }

    /// Install a fake cargo that produces the expected build outputs
    ///
    /// `install_exit` is the exit code of `cargo install` and `build_exit`
    /// the exit code of `cargo build`.
    #[cfg(unix)]
    pub fn install_cargo(&self, install_exit: i32, build_exit: i32) {
        self.install_tool(
            "cargo",
            &format!(
                r#"case "$1" in
  install) exit {install_exit} ;;
  build)
    if [ {build_exit} -ne 0 ]; then exit {build_exit}; fi
    : > target/release/mediarepo-daemon ;;
  tauri)
    : > src-tauri/target/release/mediarepo-ui
    : > src-tauri/target/release/bundle/deb/mediarepo-ui.deb ;;
esac
exit 0"#
            ),
        );
    }

    /// Run the binary in the project directory with only fake tools on PATH
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_from(&self.path(), args)
    }

    /// Run the binary from `cwd` with only fake tools on PATH
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_mediarepo-build"))
            .current_dir(cwd)
            .env("PATH", self.bin.path())
            .env_remove("MEDIAREPO_BUILD_CONFIG")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute mediarepo-build")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Lossy stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
