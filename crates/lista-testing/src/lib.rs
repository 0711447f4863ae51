//! Testing infrastructure for lista integration tests.
//!
//! - `TestWorld`: isolated data directory plus a CLI invocation wrapper
//! - `fixtures`: sample item construction and blob seeding

pub mod fixtures;
pub mod world;

pub use world::{CommandResult, TestWorld};
