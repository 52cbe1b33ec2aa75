//! Generation request: the immutable input to one orchestration run.

use crate::{ArtifactKind, TripContext, WeatherForecast};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One request to generate an artifact for a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct GenerationRequest {
    /// Which artifact to generate
    artifact_kind: ArtifactKind,
    /// Sanitized trip facts
    trip: TripContext,
    /// Forecast for the trip window
    weather: WeatherForecast,
}

impl GenerationRequest {
    /// Creates a builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}
