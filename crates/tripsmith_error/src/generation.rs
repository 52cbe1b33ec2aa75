//! Terminal generation error raised after all fallback tiers fail.

/// Diagnostic record for one fallback tier attempt.
///
/// Retained for logging only; never echoed to the end caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptDiagnostic {
    /// Tier name (primary, compact_retry, repair)
    pub tier: String,
    /// Backend-reported stop reason, or "unknown" where absent
    pub stop_reason: String,
    /// What failed at this tier
    pub detail: String,
}

/// All fallback tiers failed structural validation.
///
/// Displays as one generic message: the per-tier diagnostics are for
/// internal logging and must not leak model output to callers.
#[derive(Debug, Clone)]
pub struct TerminalGenerationError {
    /// Wire name of the artifact that could not be generated
    pub artifact: String,
    /// One diagnostic per attempted tier
    pub attempts: Vec<AttemptDiagnostic>,
}

impl TerminalGenerationError {
    /// Create a new TerminalGenerationError.
    pub fn new(artifact: impl Into<String>, attempts: Vec<AttemptDiagnostic>) -> Self {
        Self {
            artifact: artifact.into(),
            attempts,
        }
    }

    /// Stop reasons for each attempted tier, in tier order.
    pub fn stop_reasons(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .map(|a| a.stop_reason.as_str())
            .collect()
    }
}

impl std::fmt::Display for TerminalGenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation failed for {} after {} attempts",
            self.artifact,
            self.attempts.len()
        )
    }
}

impl std::error::Error for TerminalGenerationError {}
