//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod favorites;
pub mod play;
