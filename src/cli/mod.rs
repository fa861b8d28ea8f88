//! CLI module for summarize
//!
//! Contains argument parsing and command implementations.

pub mod args;
pub mod commands;
pub mod completions;
pub mod spinner;

pub use args::{Cli, Commands, ConfigCommand};
