//! Generative-text provider adapters for Tripsmith.
//!
//! Two interchangeable backends (Anthropic messages API and
//! OpenAI-compatible chat completions) are normalized behind the
//! [`TextGenerator`] trait: one invocation contract, one concatenated
//! response string, one stop-reason vocabulary. Errors are never
//! swallowed here; they propagate untouched so the retry executor can
//! classify them.

mod anthropic;
mod config;
mod http;
mod openai;

pub use anthropic::{AnthropicClient, AnthropicRequest, AnthropicResponse};
pub use config::{ModelConfig, Provider};
pub use openai::{ChatRequest, ChatResponse, OpenAiClient};

use async_trait::async_trait;
use tripsmith_core::{ModelOutput, PromptPair};
use tripsmith_error::ProviderError;

/// Invocation contract shared by both backend adapters.
///
/// Each adapter issues the call, concatenates the structured response
/// body into one string, and maps the backend's completion-reason
/// field to a [`tripsmith_core::StopReason`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Invokes the backend with a system/user prompt pair.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` classified for retryability; transient
    /// transport failures and 429/5xx statuses are retryable, credential
    /// and request-shape failures are not.
    async fn generate(
        &self,
        prompt: &PromptPair,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelOutput, ProviderError>;

    /// Name of the backing provider, for logging.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl TextGenerator for Box<dyn TextGenerator> {
    async fn generate(
        &self,
        prompt: &PromptPair,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelOutput, ProviderError> {
        (**self).generate(prompt, max_tokens, temperature).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

/// Builds the configured backend adapter.
///
/// Provider selection happens once, at orchestration construction time,
/// never per call.
pub fn build_generator(config: &ModelConfig) -> Box<dyn TextGenerator> {
    match config.provider() {
        Provider::Anthropic => Box::new(AnthropicClient::from_config(config)),
        Provider::OpenAi => Box::new(OpenAiClient::from_config(config)),
    }
}
