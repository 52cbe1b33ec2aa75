mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
