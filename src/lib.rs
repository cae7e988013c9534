//! mediarepo-build - Build orchestration for the mediarepo daemon and UI
//!
//! This library checks the host toolchain for each component, drives the
//! external build tools and collects the produced binaries and bundles into
//! a single output directory.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build workflow (components, checks, orchestration, artifacts)
//! - [`infra`] - Infrastructure layer (processes, tool lookup, filesystem)
//! - [`config`] - Configuration file and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
