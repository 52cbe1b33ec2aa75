//! Tests for candidate extraction and structural validation.

use tripsmith_core::ArtifactKind;
use tripsmith_generate::extract::{
    brace_span, extract_candidates, fenced_block, parse_artifact, raw_trimmed,
};

#[test]
fn test_raw_trimmed() {
    assert_eq!(raw_trimmed("  {\"a\":1}  "), Some("{\"a\":1}".to_string()));
    assert_eq!(raw_trimmed("   \n  "), None);
}

#[test]
fn test_fenced_block() {
    let text = "Here you go:\n```json\n{\"a\":1}\n```\nHope that helps!";
    assert_eq!(fenced_block(text), Some("{\"a\":1}".to_string()));

    // No language tag on the fence
    let text = "```\n{\"a\":1}\n```";
    assert_eq!(fenced_block(text), Some("{\"a\":1}".to_string()));

    assert_eq!(fenced_block("no fence here"), None);
    assert_eq!(fenced_block("```json\n{\"a\":1}"), None);
}

#[test]
fn test_brace_span() {
    assert_eq!(
        brace_span("note: {\"a\":1} done"),
        Some("{\"a\":1}".to_string())
    );
    assert_eq!(brace_span("no braces"), None);
    assert_eq!(brace_span("} reversed {"), None);
}

#[test]
fn test_candidate_order_for_fenced_json() {
    let text = "```json\n{\"a\":1}\n```";
    let candidates = extract_candidates(text);

    // Raw text first (will fail to parse because of the fence), then the
    // fenced body, then the brace span.
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0], text);
    assert_eq!(candidates[1], "{\"a\":1}");
    assert_eq!(candidates[2], "{\"a\":1}");
}

#[test]
fn test_parse_succeeds_on_second_candidate() {
    let text = "```json\n{\"categories\":[]}\n```";
    let artifact =
        parse_artifact(ArtifactKind::PackingList, text).expect("fenced candidate parses");
    assert_eq!(
        artifact.value(),
        &serde_json::json!({"categories": []})
    );
}

#[test]
fn test_parse_wrapped_in_commentary() {
    let text = "Sure! Here is your packing list: {\"categories\":[{\"name\":\"Clothing\",\"items\":[]}]} Let me know if you need more.";
    let artifact = parse_artifact(ArtifactKind::PackingList, text).expect("brace span parses");
    assert_eq!(artifact.kind(), ArtifactKind::PackingList);
}

#[test]
fn test_empty_arrays_are_structurally_valid() {
    let artifact = parse_artifact(ArtifactKind::PackingList, "{\"categories\":[]}")
        .expect("empty categories array is valid shape");
    assert_eq!(artifact.value()["categories"], serde_json::json!([]));
}

#[test]
fn test_trip_plan_requires_all_arrays() {
    let missing_tips = r#"{"overview":"x","suggestedActivities":[],"dailyItinerary":[]}"#;
    let err = parse_artifact(ArtifactKind::TripPlan, missing_tips).unwrap_err();
    assert!(err.detail.contains("tips"));

    let complete = r#"{"overview":"x","suggestedActivities":[],"dailyItinerary":[],"tips":[]}"#;
    parse_artifact(ArtifactKind::TripPlan, complete).expect("all required arrays present");
}

#[test]
fn test_non_array_field_fails_shape_check() {
    let err = parse_artifact(ArtifactKind::PackingList, "{\"categories\":\"none\"}").unwrap_err();
    assert!(err.detail.contains("not an array"));
}

#[test]
fn test_unparsable_text_keeps_last_failure() {
    let err = parse_artifact(ArtifactKind::PackingList, "I could not generate a list today.")
        .unwrap_err();
    assert_eq!(err.artifact, "packing_list");
    assert!(err.candidates_tried >= 1);
}

#[test]
fn test_empty_text_has_no_candidates() {
    let err = parse_artifact(ArtifactKind::PackingList, "   ").unwrap_err();
    assert_eq!(err.candidates_tried, 0);
}
