mod client;
mod types;

pub use client::AnthropicClient;
pub use types::{
    AnthropicContent, AnthropicMessage, AnthropicRequest, AnthropicRequestBuilder,
    AnthropicResponse, AnthropicUsage,
};
