//! Host platform detection

/// Host operating system family
///
/// Only the Windows/non-Windows split matters for building: it decides the
/// executable suffix and which Unix-only tools are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Microsoft Windows
    Windows,
    /// Linux, macOS and other Unix-like systems
    Unix,
}

impl Host {
    /// Detect the host at compile time
    pub const fn current() -> Self {
        if cfg!(windows) {
            Host::Windows
        } else {
            Host::Unix
        }
    }

    /// Whether this is a Windows host
    pub const fn is_windows(self) -> bool {
        matches!(self, Host::Windows)
    }

    /// Suffix appended to executable file names
    pub const fn exe_suffix(self) -> &'static str {
        match self {
            Host::Windows => ".exe",
            Host::Unix => "",
        }
    }

    /// File name of an executable on this host
    pub fn executable_name(self, name: &str) -> String {
        format!("{name}{}", self.exe_suffix())
    }
}
