//! Tolerant multi-candidate JSON extraction and structural validation.
//!
//! The backend may wrap valid JSON in commentary or markdown despite
//! instructions not to, so extraction runs an ordered list of pure
//! `text -> Option<String>` extractors and parsing accepts the first
//! candidate that both parses and satisfies the artifact's shape
//! contract.

use serde_json::Value as JsonValue;
use tracing::debug;
use tripsmith_core::{ArtifactKind, ParsedArtifact};
use tripsmith_error::SchemaError;

/// The raw text, trimmed. `None` when empty.
pub fn raw_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Body of the first fenced code block, if present.
///
/// The language tag on the opening fence line is skipped.
pub fn fenced_block(text: &str) -> Option<String> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    let candidate = body[..end].trim();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate.to_string())
    }
}

/// Substring between the first `{` and the last `}`, if both exist.
pub fn brace_span(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(text[start..=end].to_string())
}

/// Ordered candidate extractors.
const EXTRACTORS: &[fn(&str) -> Option<String>] = &[raw_trimmed, fenced_block, brace_span];

/// Applies the extractors in order, collecting every candidate present.
pub fn extract_candidates(text: &str) -> Vec<String> {
    EXTRACTORS
        .iter()
        .filter_map(|extractor| extractor(text))
        .collect()
}

/// Parses response text into a shape-valid artifact.
///
/// Tries each extraction candidate in order; the first one that parses
/// as a JSON object containing all of the artifact's required arrays is
/// returned unchanged. Empty arrays pass: tolerance is structural, not
/// semantic.
///
/// # Errors
///
/// Returns a `SchemaError` carrying the last parse or shape failure
/// when no candidate validates.
pub fn parse_artifact(kind: ArtifactKind, text: &str) -> Result<ParsedArtifact, SchemaError> {
    let candidates = extract_candidates(text);
    if candidates.is_empty() {
        return Err(SchemaError::new(kind.wire_name(), 0, "response text is empty"));
    }

    let mut last_failure = String::new();
    for (index, candidate) in candidates.iter().enumerate() {
        match serde_json::from_str::<JsonValue>(candidate) {
            Ok(value) => match check_shape(kind, &value) {
                Ok(()) => {
                    debug!(
                        artifact = %kind,
                        candidate = index,
                        "Candidate passed structural validation"
                    );
                    return Ok(ParsedArtifact::new(kind, value));
                }
                Err(failure) => last_failure = failure,
            },
            Err(e) => last_failure = format!("candidate {} did not parse: {}", index, e),
        }
    }

    Err(SchemaError::new(kind.wire_name(), candidates.len(), last_failure))
}

/// Checks that the value is an object with the kind's required arrays.
fn check_shape(kind: ArtifactKind, value: &JsonValue) -> Result<(), String> {
    let object = value
        .as_object()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    for field in kind.required_arrays() {
        match object.get(*field) {
            Some(v) if v.is_array() => {}
            Some(_) => return Err(format!("field '{}' is not an array", field)),
            None => return Err(format!("missing required array '{}'", field)),
        }
    }

    Ok(())
}
