//! Anthropic messages API request and response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Anthropic API request.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// List of messages
    messages: Vec<AnthropicMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Optional temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// Role of the message sender
    pub role: String,
    /// Message content
    pub content: String,
}

/// Anthropic API response.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Content blocks
    content: Vec<AnthropicContent>,
    /// Stop reason
    #[serde(default)]
    stop_reason: Option<String>,
    /// Usage information
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Concatenates all text blocks into one response string.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.content_type == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Content block in an Anthropic response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicContent {
    /// Content type (always "text" for now)
    #[serde(rename = "type")]
    pub content_type: String,
    /// Text content
    #[serde(default)]
    pub text: String,
}

/// Usage information from Anthropic API.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicUsage {
    /// Input tokens
    pub input_tokens: u32,
    /// Output tokens
    pub output_tokens: u32,
}
