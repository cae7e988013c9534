//! Configuration and constants
//!
//! - [`defaults`] - Built-in defaults, tool pins and project layout names
//! - [`file`] - Optional per-project configuration file

pub mod defaults;
pub mod file;
