//! Core data types for the Tripsmith generation pipeline.
//!
//! This crate provides the foundation data types shared by the provider
//! adapters and the generation orchestrator: the immutable trip inputs,
//! the prompt pair, the invocation result, and the validated artifacts.

mod artifact;
mod invocation;
mod prompt;
mod request;
mod trip;
mod weather;

pub use artifact::{
    ArtifactKind, ItineraryDay, PackingCategory, PackingItem, PackingList, ParsedArtifact,
    SuggestedActivity, TripPlan,
};
pub use invocation::{AttemptRecord, ModelOutput, StopReason, Tier};
pub use prompt::{PromptPair, PromptVariant};
pub use request::GenerationRequest;
pub use trip::{ChildProfile, TripContext};
pub use weather::{ForecastPeriod, WeatherForecast};
