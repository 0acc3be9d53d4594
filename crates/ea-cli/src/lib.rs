//! Assistant availability CLI library.
//!
//! This crate provides the CLI interface over the `ea-core` engine.

mod cli;
pub mod commands;
mod config;
pub mod snapshot;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use snapshot::Snapshot;
