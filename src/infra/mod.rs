//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, external processes and host
//! detection. Core logic reaches processes and tool lookup only through the
//! [`process::CommandRunner`] and [`probe::ToolLocator`] traits.

pub mod filesystem;
pub mod platform;
pub mod probe;
pub mod process;
