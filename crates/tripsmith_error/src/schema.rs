//! Schema validation error for model output.

/// Model text was unparsable or missing required structure.
///
/// This is not a network failure: it triggers tier escalation in the
/// orchestrator, never retry-with-backoff.
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Wire name of the artifact being parsed
    pub artifact: String,
    /// Number of extraction candidates attempted
    pub candidates_tried: usize,
    /// The last parse or shape failure observed
    pub detail: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError at the current location.
    #[track_caller]
    pub fn new(
        artifact: impl Into<String>,
        candidates_tried: usize,
        detail: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            artifact: artifact.into(),
            candidates_tried,
            detail: detail.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schema Error: {} failed structural validation after {} candidates: {} at line {} in {}",
            self.artifact, self.candidates_tried, self.detail, self.line, self.file
        )
    }
}

impl std::error::Error for SchemaError {}
