use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiCompatClient;
use crate::SummarizeError;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub transcript: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String>;
}

/// Defaults for an OpenAI-compatible chat completion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub model: &'static str,
    pub api_key_env: &'static str,
}

pub const GROQ: ProviderProfile = ProviderProfile {
    name: "groq",
    endpoint: "https://api.groq.com/openai/v1",
    model: "openai/gpt-oss-120b",
    api_key_env: "GROQ_API_KEY",
};

pub const OPENAI: ProviderProfile = ProviderProfile {
    name: "openai",
    endpoint: "https://api.openai.com/v1",
    model: "gpt-4o-mini",
    api_key_env: "OPENAI_API_KEY",
};

/// Look up a provider profile by (case-insensitive) name.
pub fn provider_profile(name: &str) -> Option<ProviderProfile> {
    match name.trim().to_lowercase().as_str() {
        "groq" => Some(GROQ),
        "openai" => Some(OPENAI),
        _ => None,
    }
}

/// Build an LLM provider from runtime settings.
///
/// Fails when the provider is unknown or no credential is available, so
/// callers can check this before doing any other work.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    let profile = provider_profile(&settings.llm.provider)
        .ok_or_else(|| SummarizeError::UnsupportedProvider(settings.llm.provider.clone()))?;

    let client = OpenAiCompatClient::from_settings(settings, profile, |key| {
        std::env::var(key).ok()
    })?;

    Ok(Box::new(client))
}
