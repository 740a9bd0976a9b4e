//! CLI module - Command-line interface for the settings tool.

pub mod args;

pub use args::{Cli, Commands};
