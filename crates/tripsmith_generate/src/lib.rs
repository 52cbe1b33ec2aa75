//! Tiered fallback generation orchestrator for Tripsmith.
//!
//! Converts a trip context plus a weather forecast into a parsed,
//! shape-valid JSON artifact despite an unreliable backend: bounded
//! retry with backoff inside each tier, tolerant multi-candidate JSON
//! extraction, and a three-tier prompt fallback (full prompt, compact
//! prompt, repair prompt over the previous raw output).

pub mod extract;
pub mod prompt;
pub mod retry;

mod orchestrator;

pub use orchestrator::{GenerationOrchestrator, OrchestratorConfig, OrchestratorConfigBuilder};
pub use retry::{RetryConfig, retry_with_backoff};
