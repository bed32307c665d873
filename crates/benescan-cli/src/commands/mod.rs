//! CLI subcommands.

pub mod analyze;
pub mod fixtures;
