//! Test utilities
//!
//! Recording fakes for the process and tool lookup seams, plus generators
//! for proptest.

#[cfg(test)]
pub mod fakes {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::rc::Rc;

    use crate::error::BuildError;
    use crate::infra::probe::ToolLocator;
    use crate::infra::process::{CommandResult, CommandRunner, CommandSpec};

    type Effect = Box<dyn Fn(&CommandSpec)>;

    /// Command runner that records every command instead of spawning it
    ///
    /// Commands are matched by prefix of their displayed form, e.g.
    /// `"cargo build"` matches `cargo build --release --frozen`.
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<CommandSpec>>,
        failures: Vec<(String, i32)>,
        effects: Vec<(String, Effect)>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail commands starting with `prefix` with the given exit code
        #[must_use]
        pub fn fail_on(mut self, prefix: &str, exit_code: i32) -> Self {
            self.failures.push((prefix.to_string(), exit_code));
            self
        }

        /// Run `effect` when a command starting with `prefix` succeeds
        #[must_use]
        pub fn on(mut self, prefix: &str, effect: impl Fn(&CommandSpec) + 'static) -> Self {
            self.effects.push((prefix.to_string(), Box::new(effect)));
            self
        }

        /// Displayed form of every command run so far
        pub fn commands(&self) -> Vec<String> {
            self.calls.borrow().iter().map(ToString::to_string).collect()
        }

        /// Commands run so far, excluding `--version` probes
        pub fn non_probe_commands(&self) -> Vec<String> {
            self.commands()
                .into_iter()
                .filter(|c| !c.ends_with(" --version"))
                .collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &CommandSpec) -> Result<CommandResult, BuildError> {
            self.calls.borrow_mut().push(command.clone());
            let displayed = command.to_string();

            if let Some((_, code)) = self
                .failures
                .iter()
                .find(|(prefix, _)| displayed.starts_with(prefix.as_str()))
            {
                return Err(BuildError::ExternalCommand {
                    command: displayed,
                    exit_code: Some(*code),
                });
            }

            for (prefix, effect) in &self.effects {
                if displayed.starts_with(prefix.as_str()) {
                    effect(command);
                }
            }
            Ok(CommandResult::success())
        }
    }

    /// Tool locator backed by an in-memory set of tool names
    #[derive(Default)]
    pub struct FakeLocator {
        tools: Rc<RefCell<HashSet<String>>>,
        probed: RefCell<Vec<String>>,
    }

    impl FakeLocator {
        pub fn with_tools(tools: &[&str]) -> Self {
            let locator = Self::default();
            locator
                .tools
                .borrow_mut()
                .extend(tools.iter().map(ToString::to_string));
            locator
        }

        /// Shared handle to the tool set, for simulating installs
        pub fn handle(&self) -> Rc<RefCell<HashSet<String>>> {
            Rc::clone(&self.tools)
        }

        /// Tool names looked up so far, in order
        pub fn probed(&self) -> Vec<String> {
            self.probed.borrow().clone()
        }
    }

    impl ToolLocator for FakeLocator {
        fn locate(&self, name: &str) -> Option<PathBuf> {
            self.probed.borrow_mut().push(name.to_string());
            self.tools
                .borrow()
                .contains(name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }
    }
}

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    /// Generate a Tauri bundle format name
    pub fn bundle_format() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("deb".to_string()),
            Just("appimage".to_string()),
            Just("msi".to_string()),
            Just("dmg".to_string()),
            Just("app".to_string()),
            Just("updater".to_string()),
        ]
    }

    /// Generate a cargo feature name
    pub fn feature_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,15}"
    }

    /// Generate a relative file tree as `path -> content`
    ///
    /// File names always carry an extension and directory names never do,
    /// so a path is never both a file and a directory.
    pub fn file_tree() -> impl Strategy<Value = BTreeMap<String, String>> {
        prop::collection::btree_map("([a-z]{1,6}/){0,2}[a-z]{1,6}\\.[a-z]{1,3}", "[a-z0-9 ]{0,24}", 1..8)
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_feature_name_generator(name in feature_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_file_tree_paths_are_relative(tree in file_tree()) {
            for path in tree.keys() {
                prop_assert!(!path.starts_with('/'));
                prop_assert!(path.contains('.'));
            }
        }
    }
}
