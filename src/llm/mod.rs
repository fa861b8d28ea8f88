//! LLM module for summarize
//!
//! Talks to OpenAI-compatible chat completion providers (Groq, OpenAI).

mod client;
mod openai;
mod prompts;

pub use client::{
    build_provider, provider_profile, LlmProvider, ProviderProfile, SummaryRequest, GROQ, OPENAI,
};
pub use openai::OpenAiCompatClient;
pub use prompts::{build_summary_messages, ChatMessage, SUMMARY_INSTRUCTION};
