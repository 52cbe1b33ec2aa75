//! Three-tier fallback orchestration for one generation request.
//!
//! Tiers run strictly sequentially: the compact tier exists to dodge
//! truncation-induced parse failures, and the repair tier operates on
//! the text an earlier tier produced. Each run is stateless; concurrent
//! runs share nothing but the injected generator.

use crate::extract::parse_artifact;
use crate::prompt;
use crate::retry::{RetryConfig, retry_with_backoff};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};
use tripsmith_core::{
    ArtifactKind, AttemptRecord, GenerationRequest, ModelOutput, ParsedArtifact, PromptPair,
    PromptVariant, Tier,
};
use tripsmith_error::{
    ProviderError, RetryableError, TerminalGenerationError, TripsmithResult,
};
use tripsmith_models::TextGenerator;

/// Temperature is pinned for deterministic sampling.
const TEMPERATURE: f32 = 0.0;

/// Tuning for one orchestrator instance.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned", default)]
pub struct OrchestratorConfig {
    /// Retry budget for the primary and compact tiers
    retry: RetryConfig,
    /// Output token budget for the full-variant prompt
    max_tokens_full: u32,
    /// Output token budget for the compact-variant prompt
    max_tokens_compact: u32,
    /// Output token budget for the repair prompt
    max_tokens_repair: u32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            max_tokens_full: 4096,
            max_tokens_compact: 2048,
            max_tokens_repair: 4096,
        }
    }
}

impl OrchestratorConfig {
    /// Creates a builder for `OrchestratorConfig`.
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }
}

/// Outcome of one tier, fed into the next transition.
enum TierOutcome {
    Parsed(ParsedArtifact),
    /// Response received but failed structural validation
    Invalid { output: ModelOutput, detail: String },
    /// Provider failed after the tier's retry budget
    ProviderFailed(ProviderError),
}

/// Composes prompt building, retrying invocation, and parsing into the
/// three-tier fallback state machine.
pub struct GenerationOrchestrator<G: TextGenerator> {
    generator: G,
    config: OrchestratorConfig,
}

impl<G: TextGenerator> GenerationOrchestrator<G> {
    /// Creates an orchestrator over an injected backend adapter.
    ///
    /// Provider selection happened when the adapter was built; it is
    /// fixed for the lifetime of this orchestrator, never per call.
    pub fn new(generator: G, config: OrchestratorConfig) -> Self {
        Self { generator, config }
    }

    /// Runs the fallback state machine for one request.
    ///
    /// Primary (full prompt) -> compact retry (smaller output budget)
    /// -> repair (corrected JSON over the previous raw output). Tier
    /// escalation happens only on structural-validation failure; a
    /// successfully parsed but empty artifact is a success.
    ///
    /// # Errors
    ///
    /// - `ProviderError` when a non-retryable backend failure occurs at
    ///   any tier: credentials and request shape cannot be fixed by
    ///   prompt changes, so the remaining tiers are skipped.
    /// - `TerminalGenerationError` when every tier fails validation,
    ///   carrying per-tier stop reasons for diagnostics.
    #[instrument(skip(self, request), fields(artifact = %request.artifact_kind(), provider = self.generator.provider_name()))]
    pub async fn generate(&self, request: &GenerationRequest) -> TripsmithResult<ParsedArtifact> {
        let kind = *request.artifact_kind();
        let mut attempts: Vec<AttemptRecord> = Vec::with_capacity(3);
        let mut primary_text: Option<String> = None;
        let mut compact_text: Option<String> = None;

        for tier in [Tier::Primary, Tier::CompactRetry, Tier::Repair] {
            let pair = match tier {
                Tier::Primary => {
                    prompt::build(kind, request.trip(), request.weather(), PromptVariant::Full)
                }
                Tier::CompactRetry => {
                    prompt::build(kind, request.trip(), request.weather(), PromptVariant::Compact)
                }
                Tier::Repair => {
                    // Prefer the compact tier's output, fall back to primary's.
                    let source = compact_text
                        .as_deref()
                        .filter(|t| !t.trim().is_empty())
                        .or(primary_text.as_deref().filter(|t| !t.trim().is_empty()));
                    match source {
                        Some(raw) => prompt::build_repair(kind, raw),
                        None => {
                            warn!("No raw text available to repair, skipping repair tier");
                            break;
                        }
                    }
                }
            };

            match self.run_tier(tier, &pair, kind).await {
                TierOutcome::Parsed(artifact) => {
                    info!(tier = %tier, "Generation succeeded");
                    return Ok(artifact);
                }
                TierOutcome::Invalid { output, detail } => {
                    debug!(tier = %tier, detail = %detail, "Tier failed validation, escalating");
                    attempts.push(AttemptRecord::new(
                        tier,
                        Some(output.stop_reason.clone()),
                        detail,
                    ));
                    match tier {
                        Tier::Primary => primary_text = Some(output.text),
                        Tier::CompactRetry => compact_text = Some(output.text),
                        Tier::Repair => {}
                    }
                }
                TierOutcome::ProviderFailed(err) => {
                    if !err.is_retryable() {
                        warn!(tier = %tier, error = %err, "Non-retryable provider error, aborting");
                        return Err(err.into());
                    }
                    debug!(tier = %tier, error = %err, "Tier exhausted its retry budget, escalating");
                    attempts.push(AttemptRecord::new(tier, None, err.to_string()));
                }
            }
        }

        warn!(
            attempts = attempts.len(),
            "All tiers failed, generation is terminal"
        );
        Err(TerminalGenerationError::new(
            kind.wire_name(),
            attempts.iter().map(Into::into).collect(),
        )
        .into())
    }

    /// Invokes the backend for one tier and parses the result.
    ///
    /// The primary and compact tiers retry transient failures within
    /// their budget; the repair tier makes a single call, keeping the
    /// worst case at five external calls per generation.
    async fn run_tier(&self, tier: Tier, pair: &PromptPair, kind: ArtifactKind) -> TierOutcome {
        let (max_tokens, retry) = match tier {
            Tier::Primary => (*self.config.max_tokens_full(), self.config.retry().clone()),
            Tier::CompactRetry => (
                *self.config.max_tokens_compact(),
                self.config.retry().clone(),
            ),
            Tier::Repair => (*self.config.max_tokens_repair(), RetryConfig::none()),
        };

        let invocation = retry_with_backoff(&retry, || {
            self.generator.generate(pair, max_tokens, TEMPERATURE)
        })
        .await;

        match invocation {
            Ok(output) => match parse_artifact(kind, &output.text) {
                Ok(artifact) => TierOutcome::Parsed(artifact),
                Err(schema_err) => TierOutcome::Invalid {
                    output,
                    detail: schema_err.to_string(),
                },
            },
            Err(provider_err) => TierOutcome::ProviderFailed(provider_err),
        }
    }
}
