//! Configuration module for summarize
//!
//! Handles loading settings from a TOML file plus environment overrides.

mod settings;

pub use settings::{LlmSettings, OutputSettings, Settings};
