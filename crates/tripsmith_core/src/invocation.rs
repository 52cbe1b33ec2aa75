//! Invocation results and per-tier attempt records.

use serde::{Deserialize, Serialize};
use tripsmith_error::AttemptDiagnostic;

/// Why the backend stopped generating.
///
/// Retained for diagnostics only; the pipeline never branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Generation completed normally
    EndTurn,
    /// Generation hit the output token limit (likely truncated)
    MaxTokens,
    /// Backend-specific reason not otherwise mapped
    Other(String),
    /// Backend reported no reason
    Unknown,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::Other(reason) => write!(f, "{}", reason),
            StopReason::Unknown => write!(f, "unknown"),
        }
    }
}

/// Normalized output of one backend invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Concatenated response text
    pub text: String,
    /// Why generation ended
    pub stop_reason: StopReason,
}

impl ModelOutput {
    /// Creates a new ModelOutput.
    pub fn new(text: impl Into<String>, stop_reason: StopReason) -> Self {
        Self {
            text: text.into(),
            stop_reason,
        }
    }
}

/// One stage of the fallback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Full-variant prompt
    Primary,
    /// Compact-variant prompt with a smaller output budget
    CompactRetry,
    /// Repair prompt over the previous raw response
    Repair,
}

impl Tier {
    /// Wire name used in diagnostics.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::CompactRetry => "compact_retry",
            Tier::Repair => "repair",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Transient record of one tier attempt, kept for terminal diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    /// Which tier was attempted
    pub tier: Tier,
    /// Stop reason from the backend, where a response was received
    pub stop_reason: Option<StopReason>,
    /// What failed at this tier
    pub detail: String,
}

impl AttemptRecord {
    /// Creates a new AttemptRecord.
    pub fn new(tier: Tier, stop_reason: Option<StopReason>, detail: impl Into<String>) -> Self {
        Self {
            tier,
            stop_reason,
            detail: detail.into(),
        }
    }
}

impl From<&AttemptRecord> for AttemptDiagnostic {
    fn from(record: &AttemptRecord) -> Self {
        AttemptDiagnostic {
            tier: record.tier.wire_name().to_string(),
            stop_reason: record
                .stop_reason
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            detail: record.detail.clone(),
        }
    }
}
