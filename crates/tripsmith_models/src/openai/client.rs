//! Client for OpenAI-compatible chat completion APIs.

use crate::TextGenerator;
use crate::config::ModelConfig;
use crate::http::{classify_status, classify_transport_error};
use crate::openai::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use tripsmith_core::{ModelOutput, PromptPair, StopReason};
use tripsmith_error::{ProviderError, ProviderErrorKind};

/// Adapter for OpenAI-compatible chat completion APIs.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI-compatible client.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Creates a client from a model configuration.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            config.api_key().clone(),
            config.model().clone(),
            config.base_url().clone(),
        )
    }

    /// Maps the OpenAI `finish_reason` field to the shared vocabulary.
    pub fn map_finish_reason(raw: Option<&str>) -> StopReason {
        match raw {
            Some("stop") => StopReason::EndTurn,
            Some("length") => StopReason::MaxTokens,
            Some(other) => StopReason::Other(other.to_string()),
            None => StopReason::Unknown,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, prompt), fields(provider = "openai", model = %self.model))]
    async fn generate(
        &self,
        prompt: &PromptPair,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelOutput, ProviderError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: prompt.system().clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt.user().clone(),
            },
        ];

        let request = ChatRequest::builder()
            .model(self.model.clone())
            .messages(messages)
            .max_tokens(Some(max_tokens))
            .temperature(Some(temperature))
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        debug!(variant = ?prompt.variant(), max_tokens, "Sending chat completion request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Chat completion request failed");
                ProviderError::new(classify_transport_error(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat completion API error");
            return Err(ProviderError::new(classify_status(status.as_u16(), body)));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode chat completion response");
            ProviderError::new(ProviderErrorKind::ResponseDecode(e.to_string()))
        })?;

        let choice = body
            .choices
            .first()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))?;

        let text = choice.message.content.clone();
        if text.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyResponse));
        }

        let stop_reason = Self::map_finish_reason(choice.finish_reason.as_deref());
        debug!(
            response_chars = text.len(),
            stop_reason = %stop_reason,
            "Received chat completion response"
        );

        Ok(ModelOutput::new(text, stop_reason))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
