//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// summarize - Turn a meeting transcript into actionable bullet points
#[derive(Parser, Debug)]
#[command(name = "summarize")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Path to the transcript text file
    #[arg(required = true)]
    pub file: Option<PathBuf>,

    /// Save the summary to a summary_<timestamp>.txt file
    #[arg(long)]
    pub save: bool,

    /// Directory for the saved summary (defaults to output.dir)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// LLM provider to use (groq, openai)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model name (defaults to the provider's model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
