//! Buildable components

use std::fmt;

use clap::ValueEnum;

/// Which part of the application to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Component {
    /// The background service
    Daemon,
    /// The Tauri UI shell
    Ui,
    /// Daemon first, then UI
    #[default]
    All,
}

impl Component {
    /// Single-component pipelines this selection runs, in order
    pub fn pipelines(self) -> &'static [Component] {
        match self {
            Component::Daemon => &[Component::Daemon],
            Component::Ui => &[Component::Ui],
            Component::All => &[Component::Daemon, Component::Ui],
        }
    }

    /// Name as used on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Component::Daemon => "daemon",
            Component::Ui => "ui",
            Component::All => "all",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
