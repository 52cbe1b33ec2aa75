//! Tests for the three-tier fallback orchestrator.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tripsmith_core::{
    ArtifactKind, ForecastPeriod, GenerationRequest, ModelOutput, PromptPair, PromptVariant,
    StopReason, TripContext, WeatherForecast,
};
use tripsmith_error::{ProviderError, ProviderErrorKind, TripsmithErrorKind};
use tripsmith_generate::{GenerationOrchestrator, OrchestratorConfig, RetryConfig};
use tripsmith_models::TextGenerator;

/// Mock backend that replays a scripted sequence of outcomes and
/// records every prompt it receives.
#[derive(Clone)]
struct ScriptedGenerator {
    script: Arc<Mutex<VecDeque<Result<ModelOutput, ProviderError>>>>,
    prompts: Arc<Mutex<Vec<(PromptPair, u32)>>>,
}

impl ScriptedGenerator {
    fn new(script: Vec<Result<ModelOutput, ProviderError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, index: usize) -> (PromptPair, u32) {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &PromptPair,
        max_tokens: u32,
        _temperature: f32,
    ) -> Result<ModelOutput, ProviderError> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.clone(), max_tokens));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: unexpected extra call")
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn ok_text(text: &str) -> Result<ModelOutput, ProviderError> {
    Ok(ModelOutput::new(text, StopReason::EndTurn))
}

fn ok_truncated(text: &str) -> Result<ModelOutput, ProviderError> {
    Ok(ModelOutput::new(text, StopReason::MaxTokens))
}

fn transient() -> Result<ModelOutput, ProviderError> {
    Err(ProviderError::new(ProviderErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    }))
}

fn auth_failure() -> Result<ModelOutput, ProviderError> {
    Err(ProviderError::new(ProviderErrorKind::Authentication(
        "invalid x-api-key".to_string(),
    )))
}

fn austin_packing_request() -> GenerationRequest {
    let trip = TripContext::builder()
        .destination("Austin, TX")
        .start_date(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2026, 6, 3).unwrap())
        .activities(vec!["hiking".to_string()])
        .children(vec![
            tripsmith_core::ChildProfile::builder()
                .age(4u8)
                .build()
                .unwrap(),
        ])
        .build()
        .unwrap();

    let weather = WeatherForecast::builder()
        .summary("Warm")
        .periods(vec![
            ForecastPeriod::builder()
                .name("Monday")
                .high(95)
                .low(70)
                .condition("Sunny")
                .precipitation(5u8)
                .build()
                .unwrap(),
        ])
        .build()
        .unwrap();

    GenerationRequest::builder()
        .artifact_kind(ArtifactKind::PackingList)
        .trip(trip)
        .weather(weather)
        .build()
        .unwrap()
}

fn six_category_packing_list() -> serde_json::Value {
    json!({
        "categories": [
            {"name": "Clothing", "items": [{"name": "T-shirts", "quantity": "4", "reason": "hot days"}]},
            {"name": "Sun protection", "items": [{"name": "Sunscreen", "quantity": "1", "reason": "95F and sunny"}]},
            {"name": "Hiking gear", "items": [{"name": "Trail shoes", "quantity": "1 pair each", "reason": "hiking planned"}]},
            {"name": "Kids", "items": [{"name": "Snacks", "quantity": "several", "reason": "4-year-old"}]},
            {"name": "Toiletries", "items": []},
            {"name": "Documents", "items": []}
        ]
    })
}

fn fast_config() -> OrchestratorConfig {
    OrchestratorConfig::builder()
        .retry(RetryConfig {
            max_retries: 1,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
        })
        .build()
        .unwrap()
}

fn orchestrator(
    script: Vec<Result<ModelOutput, ProviderError>>,
) -> (GenerationOrchestrator<ScriptedGenerator>, ScriptedGenerator) {
    let generator = ScriptedGenerator::new(script);
    let handle = generator.clone();
    (
        GenerationOrchestrator::new(generator, fast_config()),
        handle,
    )
}

#[tokio::test]
async fn test_primary_success_makes_exactly_one_call() {
    let expected = six_category_packing_list();
    let (orchestrator, handle) = orchestrator(vec![ok_text(&expected.to_string())]);

    let artifact = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("primary tier succeeds");

    assert_eq!(artifact.value(), &expected);
    assert_eq!(handle.call_count(), 1);
}

#[tokio::test]
async fn test_compact_result_returned_when_primary_fails_shape() {
    let compact = json!({"categories": [{"name": "Clothing", "items": []}]});
    let (orchestrator, handle) = orchestrator(vec![
        ok_truncated("{\"categories\": [{\"name\": \"Clo"),
        ok_text(&compact.to_string()),
    ]);

    let artifact = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("compact tier succeeds");

    assert_eq!(artifact.value(), &compact);
    assert_eq!(handle.call_count(), 2);
    assert_eq!(*handle.prompt(1).0.variant(), PromptVariant::Compact);
}

#[tokio::test]
async fn test_all_tiers_failing_is_terminal_with_three_stop_reasons() {
    let (orchestrator, handle) = orchestrator(vec![
        ok_text("I'm sorry, I can't produce JSON today."),
        ok_truncated("{\"categories\": [{\"na"),
        ok_text("still not json"),
    ]);

    let err = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect_err("all tiers fail");

    match err.kind() {
        TripsmithErrorKind::Terminal(terminal) => {
            assert_eq!(terminal.attempts.len(), 3);
            assert_eq!(
                terminal.stop_reasons(),
                vec!["end_turn", "max_tokens", "end_turn"]
            );
            assert_eq!(terminal.artifact, "packing_list");
        }
        other => panic!("expected terminal error, got {:?}", other),
    }
    assert_eq!(handle.call_count(), 3);
}

#[tokio::test]
async fn test_repair_accepts_empty_but_valid_shape() {
    let (orchestrator, handle) = orchestrator(vec![
        ok_text("not json"),
        ok_text("also not json"),
        ok_text("{\"categories\":[]}"),
    ]);

    let artifact = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("repair tier succeeds");

    // Empty array is structurally valid: shape tolerance, not semantic.
    assert_eq!(artifact.value(), &json!({"categories": []}));
    assert_eq!(handle.call_count(), 3);
}

#[tokio::test]
async fn test_non_retryable_provider_error_short_circuits() {
    let (orchestrator, handle) = orchestrator(vec![auth_failure()]);

    let err = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect_err("auth failure aborts");

    match err.kind() {
        TripsmithErrorKind::Provider(provider) => {
            assert!(matches!(
                provider.kind,
                ProviderErrorKind::Authentication(_)
            ));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
    assert_eq!(handle.call_count(), 1);
}

#[tokio::test]
async fn test_transient_error_retried_within_tier() {
    let expected = six_category_packing_list();
    let (orchestrator, handle) =
        orchestrator(vec![transient(), ok_text(&expected.to_string())]);

    let artifact = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("retry recovers the primary tier");

    assert_eq!(artifact.value(), &expected);
    assert_eq!(handle.call_count(), 2);
}

#[tokio::test]
async fn test_retry_exhaustion_escalates_to_compact_tier() {
    let compact = json!({"categories": []});
    let (orchestrator, handle) = orchestrator(vec![
        transient(),
        transient(),
        ok_text(&compact.to_string()),
    ]);

    let artifact = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("compact tier succeeds after primary exhaustion");

    assert_eq!(artifact.value(), &compact);
    assert_eq!(handle.call_count(), 3);
}

#[tokio::test]
async fn test_repair_skipped_when_no_tier_produced_text() {
    let (orchestrator, handle) = orchestrator(vec![
        transient(),
        transient(),
        transient(),
        transient(),
    ]);

    let err = orchestrator
        .generate(&austin_packing_request())
        .await
        .expect_err("nothing to repair");

    match err.kind() {
        TripsmithErrorKind::Terminal(terminal) => {
            assert_eq!(terminal.attempts.len(), 2);
            assert_eq!(terminal.stop_reasons(), vec!["unknown", "unknown"]);
        }
        other => panic!("expected terminal error, got {:?}", other),
    }
    assert_eq!(handle.call_count(), 4);
}

#[tokio::test]
async fn test_repair_prompt_carries_most_recent_raw_output() {
    let (orchestrator, handle) = orchestrator(vec![
        ok_text("primary garbage"),
        ok_text("compact garbage"),
        ok_text("{\"categories\":[]}"),
    ]);

    orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("repair tier succeeds");

    let (repair_prompt, _) = handle.prompt(2);
    assert_eq!(repair_prompt.user(), "compact garbage");
    assert!(repair_prompt.system().contains("corrected JSON"));
}

#[tokio::test]
async fn test_trip_data_stays_out_of_system_prompt() {
    let expected = six_category_packing_list();
    let (orchestrator, handle) = orchestrator(vec![ok_text(&expected.to_string())]);

    orchestrator
        .generate(&austin_packing_request())
        .await
        .expect("primary tier succeeds");

    let (prompt, max_tokens) = handle.prompt(0);
    assert!(prompt.user().contains("Austin, TX"));
    assert!(prompt.user().contains("hiking"));
    assert!(!prompt.system().contains("Austin"));
    assert_eq!(*prompt.variant(), PromptVariant::Full);
    assert_eq!(max_tokens, 4096);
}

#[tokio::test]
async fn test_trip_plan_generation_on_primary_tier() {
    let plan = json!({
        "overview": "Three warm days in Austin with a preschooler.",
        "suggestedActivities": [{
            "id": "barton-springs",
            "name": "Barton Springs Pool",
            "category": "outdoor",
            "description": "Spring-fed pool",
            "duration": "2 hours",
            "kidFriendly": true,
            "weatherDependent": true,
            "bestDays": ["Monday"],
            "reason": "Cools everyone down on a 95F day"
        }],
        "dailyItinerary": [{"day": "Day 1", "activities": ["barton-springs"], "meals": "Tacos", "notes": "Bring floaties"}],
        "tips": ["Carry water everywhere"]
    });

    let trip_request = {
        let base = austin_packing_request();
        GenerationRequest::builder()
            .artifact_kind(ArtifactKind::TripPlan)
            .trip(base.trip().clone())
            .weather(base.weather().clone())
            .build()
            .unwrap()
    };

    let (orchestrator, handle) = orchestrator(vec![ok_text(&plan.to_string())]);

    let artifact = orchestrator
        .generate(&trip_request)
        .await
        .expect("primary tier succeeds");

    assert_eq!(artifact.value(), &plan);
    assert_eq!(handle.call_count(), 1);

    let typed = artifact.as_trip_plan().expect("typed view available");
    assert_eq!(typed.suggested_activities.len(), 1);
    assert!(typed.suggested_activities[0].kid_friendly);
}
