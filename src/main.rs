//! summarize - Meeting transcript summaries from the command line
//!
//! Entry point for the summarize CLI application.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use summarize::cli::{Cli, Commands};
use summarize::config::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the summary itself
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            summarize::cli::completions::print(shell);
        }
        Some(Commands::Config(config_cmd)) => {
            let settings = Settings::load()?;
            summarize::cli::commands::config_command(&settings, config_cmd)?;
        }
        None => {
            let file = cli.file.context("A transcript file is required")?;

            let mut settings = Settings::load()?;
            settings.apply_cli_overrides(cli.provider, cli.model, cli.output_dir);

            summarize::cli::commands::summarize_file(&settings, &file, cli.save).await?;
        }
    }

    Ok(())
}
