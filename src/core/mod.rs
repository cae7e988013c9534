//! Core build workflow
//!
//! This module holds the workflow itself. Processes and tool lookup are
//! reached only through the traits in [`crate::infra`], so every step can
//! be exercised with fakes.
//!
//! # Submodules
//!
//! - [`component`] - Component selection
//! - [`configuration`] - Immutable per-invocation build settings
//! - [`tooling`] - Static tool requirements per component
//! - [`check`] - Dependency verification and tooling installation
//! - [`artifact`] - Artifact collection into the output directory
//! - [`builder`] - Build orchestration
//! - [`clean`] - Output directory cleanup

pub mod artifact;
pub mod builder;
pub mod check;
pub mod clean;
pub mod component;
pub mod configuration;
pub mod tooling;
