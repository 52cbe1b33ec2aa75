//! Tests for artifact types and attempt diagnostics.

use serde_json::json;
use tripsmith_core::{
    ArtifactKind, AttemptRecord, ParsedArtifact, StopReason, Tier,
};
use tripsmith_error::AttemptDiagnostic;

#[test]
fn test_required_arrays_per_kind() {
    assert_eq!(ArtifactKind::PackingList.required_arrays(), &["categories"]);
    assert_eq!(
        ArtifactKind::TripPlan.required_arrays(),
        &["suggestedActivities", "dailyItinerary", "tips"]
    );
}

#[test]
fn test_parsed_artifact_returns_value_unchanged() {
    let value = json!({"categories": [{"name": "Clothing", "items": []}]});
    let artifact = ParsedArtifact::new(ArtifactKind::PackingList, value.clone());

    assert_eq!(artifact.value(), &value);
    assert_eq!(artifact.into_value(), value);
}

#[test]
fn test_typed_packing_list_view() {
    let value = json!({
        "categories": [
            {"name": "Clothing", "items": [{"name": "Socks", "quantity": "5", "reason": "daily"}]}
        ]
    });
    let artifact = ParsedArtifact::new(ArtifactKind::PackingList, value);

    let list = artifact.as_packing_list().expect("typed view");
    assert_eq!(list.categories.len(), 1);
    assert_eq!(list.categories[0].items[0].name, "Socks");
    assert!(artifact.as_trip_plan().is_none());
}

#[test]
fn test_typed_view_tolerates_missing_fields() {
    // Structural validation never deep-checks; the typed view defaults
    // whatever the model left out.
    let value = json!({"categories": [{"name": "Misc"}]});
    let artifact = ParsedArtifact::new(ArtifactKind::PackingList, value);

    let list = artifact.as_packing_list().expect("lenient typed view");
    assert!(list.categories[0].items.is_empty());
}

#[test]
fn test_attempt_record_converts_to_diagnostic() {
    let record = AttemptRecord::new(
        Tier::CompactRetry,
        Some(StopReason::MaxTokens),
        "missing required array 'categories'",
    );
    let diagnostic = AttemptDiagnostic::from(&record);

    assert_eq!(diagnostic.tier, "compact_retry");
    assert_eq!(diagnostic.stop_reason, "max_tokens");

    let record = AttemptRecord::new(Tier::Repair, None, "503 after retries");
    let diagnostic = AttemptDiagnostic::from(&record);
    assert_eq!(diagnostic.stop_reason, "unknown");
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::EndTurn.to_string(), "end_turn");
    assert_eq!(StopReason::Unknown.to_string(), "unknown");
    assert_eq!(
        StopReason::Other("content_filter".to_string()).to_string(),
        "content_filter"
    );
}
