//! summarize - Turn a meeting transcript into actionable bullet points
//!
//! Reads a transcript file, asks a hosted chat-completion model for a summary
//! and prints (optionally saves) the result.

pub mod cli;
pub mod config;
pub mod llm;
pub mod transcript;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for summarize
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("The file '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("The file is empty.")]
    EmptyTranscript(PathBuf),

    #[error("Error reading file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{var} environment variable is not set.")]
    MissingApiKey { provider: String, var: &'static str },

    #[error("Unsupported llm.provider '{0}'. Supported providers: groq, openai")]
    UnsupportedProvider(String),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Application name
pub const APP_NAME: &str = "summarize";
