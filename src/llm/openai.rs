use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{LlmProvider, ProviderProfile, SummaryRequest};
use crate::llm::prompts::{build_summary_messages, ChatMessage};
use crate::SummarizeError;

/// Client for any provider speaking the OpenAI chat completions API.
pub struct OpenAiCompatClient {
    http: Client,
    provider: &'static str,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: f64,
}

impl OpenAiCompatClient {
    /// Build a client, resolving the API key from settings first and then
    /// from the provider's environment variable via `lookup_env`.
    pub fn from_settings<F>(
        settings: &Settings,
        profile: ProviderProfile,
        lookup_env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = Some(settings.llm.api_key.trim().to_string())
            .filter(|key| !key.is_empty())
            .or_else(|| {
                lookup_env(profile.api_key_env)
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
            })
            .ok_or_else(|| SummarizeError::MissingApiKey {
                provider: profile.name.to_string(),
                var: profile.api_key_env,
            })?;

        let model = if settings.llm.model.trim().is_empty() {
            profile.model.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            profile.endpoint.to_string()
        } else {
            settings.llm.endpoint.trim().trim_end_matches('/').to_string()
        };

        tracing::debug!(provider = profile.name, %model, %endpoint, "Configured LLM provider");

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
                .build()
                .context("Failed to build HTTP client")?,
            provider: profile.name,
            api_key,
            model,
            endpoint,
            temperature: settings.llm.temperature,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatClient {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: build_summary_messages(request.transcript).to_vec(),
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("{} request failed", self.provider))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "{} returned {}: {}",
                self.provider,
                status,
                provider_error_message(&text)
            );
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", self.provider))?;

        extract_summary(payload)
            .with_context(|| format!("{} response did not contain summary text", self.provider))
    }
}

fn extract_summary(payload: ChatCompletionResponse) -> Option<String> {
    payload
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
}

/// Pull `error.message` out of a provider error body, falling back to the raw text.
fn provider_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => err.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
