//! CLI subcommand implementations.

pub mod classify;
pub mod dashboard;
pub mod slots;
pub mod suggest;
pub mod util;
