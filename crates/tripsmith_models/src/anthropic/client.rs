//! Client for the Anthropic messages API.

use crate::TextGenerator;
use crate::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::config::ModelConfig;
use crate::http::{classify_status, classify_transport_error};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use tripsmith_core::{ModelOutput, PromptPair, StopReason};
use tripsmith_error::{ProviderError, ProviderErrorKind};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Adapter for the Anthropic messages API.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
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

    /// Maps the Anthropic `stop_reason` field to the shared vocabulary.
    pub fn map_stop_reason(raw: Option<&str>) -> StopReason {
        match raw {
            Some("end_turn") => StopReason::EndTurn,
            Some("max_tokens") => StopReason::MaxTokens,
            Some(other) => StopReason::Other(other.to_string()),
            None => StopReason::Unknown,
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    #[instrument(skip(self, prompt), fields(provider = "anthropic", model = %self.model))]
    async fn generate(
        &self,
        prompt: &PromptPair,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<ModelOutput, ProviderError> {
        let request = AnthropicRequest::builder()
            .model(self.model.clone())
            .messages(vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.user().clone(),
            }])
            .max_tokens(max_tokens)
            .system(Some(prompt.system().clone()))
            .temperature(Some(temperature))
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        debug!(variant = ?prompt.variant(), max_tokens, "Sending Anthropic request");

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Anthropic request failed");
                ProviderError::new(classify_transport_error(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API error");
            return Err(ProviderError::new(classify_status(status.as_u16(), body)));
        }

        let body: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode Anthropic response");
            ProviderError::new(ProviderErrorKind::ResponseDecode(e.to_string()))
        })?;

        let text = body.joined_text();
        if text.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyResponse));
        }

        let stop_reason = Self::map_stop_reason(body.stop_reason().as_deref());
        debug!(
            response_chars = text.len(),
            stop_reason = %stop_reason,
            "Received Anthropic response"
        );

        Ok(ModelOutput::new(text, stop_reason))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
