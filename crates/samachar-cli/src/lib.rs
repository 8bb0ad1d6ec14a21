// Rust guideline compliant 2026-10-14

//! Samachar CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod fixture;
pub mod logging;
pub mod output;

pub use fixture::{Fixture, FixtureBackend};
pub use output::{create_formatter, OutputFormatter};
