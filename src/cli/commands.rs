//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::cli::spinner::Spinner;
use crate::config::Settings;
use crate::llm::{build_provider, LlmProvider, SummaryRequest};
use crate::transcript::read_transcript;

const BANNER_WIDTH: usize = 40;
const SPINNER_MESSAGE: &str = "Analyzing transcript...";

/// Options for a single summary run.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    /// Directory to write `summary_<unix>.txt` into; `None` disables saving.
    pub save_dir: Option<PathBuf>,
    /// Animate a spinner on stderr while the provider call runs.
    pub spinner: bool,
}

/// Summarize a transcript file with the configured provider.
pub async fn summarize_file(settings: &Settings, file: &Path, save: bool) -> Result<()> {
    // Credential problems surface here, before the transcript is touched.
    let provider = build_provider(settings)?;

    let options = SummaryOptions {
        save_dir: save.then(|| settings.output.dir.clone()),
        spinner: io::stderr().is_terminal(),
    };

    let mut stdout = io::stdout();
    run_summary(provider.as_ref(), file, &options, &mut stdout).await?;
    Ok(())
}

/// Read, summarize, print and optionally save. Returns the saved file path.
pub async fn run_summary<W: Write>(
    provider: &dyn LlmProvider,
    file: &Path,
    options: &SummaryOptions,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let transcript = read_transcript(file)?;

    let spinner = options.spinner.then(|| Spinner::start(SPINNER_MESSAGE));
    let result = provider
        .summarize(SummaryRequest {
            transcript: &transcript,
        })
        .await;
    if let Some(spinner) = spinner {
        spinner.stop();
    }
    let summary = result?;

    out.write_all(render_summary(&summary).as_bytes())?;

    let saved = match &options.save_dir {
        Some(dir) => {
            let path = save_summary(dir, &summary, chrono::Utc::now().timestamp())?;
            writeln!(out)?;
            writeln!(out, "Summary saved to: {}", path.display())?;
            Some(path)
        }
        None => None,
    };
    out.flush()?;

    Ok(saved)
}

/// Frame a summary with the MEETING SUMMARY banner.
pub fn render_summary(summary: &str) -> String {
    let rule = "═".repeat(BANNER_WIDTH);
    format!("\n{rule}\nMEETING SUMMARY\n{rule}\n\n{summary}\n\n{rule}\n")
}

/// Write the summary text to `<dir>/summary_<unix_secs>.txt`.
pub fn save_summary(dir: &Path, summary: &str, unix_secs: i64) -> Result<PathBuf> {
    let path = dir.join(format!("summary_{unix_secs}.txt"));
    std::fs::write(&path, summary)
        .with_context(|| format!("Failed to save summary to {}", path.display()))?;

    tracing::info!(path = %path.display(), "Summary saved");
    Ok(path)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
