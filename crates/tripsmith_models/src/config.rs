//! Provider selection and credential configuration.

use derive_getters::Getters;
use std::str::FromStr;
use tripsmith_error::ConfigError;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The two recognized generative-text backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Anthropic messages API
    Anthropic,
    /// OpenAI-compatible chat completions
    OpenAi,
}

impl Provider {
    /// Wire name used in configuration and logging.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAi => "openai",
        }
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAi),
            other => Err(ConfigError::new(format!(
                "Unrecognized provider '{}': expected 'anthropic' or 'openai'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Configuration for one backend adapter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ModelConfig {
    /// Selected backend
    provider: Provider,
    /// Model identifier
    model: String,
    /// Credential for the selected backend
    api_key: String,
    /// Endpoint URL
    base_url: String,
}

impl ModelConfig {
    /// Creates a builder for `ModelConfig`.
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Creates a config for a provider with its default model and endpoint.
    pub fn for_provider(provider: Provider, api_key: impl Into<String>) -> Self {
        let (model, base_url) = match provider {
            Provider::Anthropic => (ANTHROPIC_DEFAULT_MODEL, ANTHROPIC_BASE_URL),
            Provider::OpenAi => (OPENAI_DEFAULT_MODEL, OPENAI_BASE_URL),
        };
        Self {
            provider,
            model: model.to_string(),
            api_key: api_key.into(),
            base_url: base_url.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `TRIPSMITH_PROVIDER` ("anthropic" or "openai", default "anthropic")
    /// - `ANTHROPIC_API_KEY` / `OPENAI_API_KEY` (required for the selected provider)
    /// - `TRIPSMITH_MODEL` (optional model override)
    /// - `TRIPSMITH_BASE_URL` (optional endpoint override)
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match std::env::var("TRIPSMITH_PROVIDER") {
            Ok(value) => Provider::from_str(&value)?,
            Err(_) => Provider::Anthropic,
        };

        let key_var = match provider {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        };
        let api_key = std::env::var(key_var).map_err(|_| {
            ConfigError::new(format!("{} not set for provider '{}'", key_var, provider))
        })?;

        let mut config = Self::for_provider(provider, api_key);
        if let Ok(model) = std::env::var("TRIPSMITH_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("TRIPSMITH_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }
}
