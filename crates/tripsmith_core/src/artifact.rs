//! Generated artifact types and structural validation contracts.
//!
//! Validation is structural only: an artifact is accepted when its
//! required top-level arrays are present, never deep type-checked.
//! The typed views below use lenient defaults so callers can read
//! well-formed fields without the pipeline enforcing them.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The two artifact types this pipeline can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Day-by-day itinerary with suggested activities
    TripPlan,
    /// Categorized packing list
    PackingList,
}

impl ArtifactKind {
    /// Wire name used in prompts and diagnostics.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ArtifactKind::TripPlan => "trip_plan",
            ArtifactKind::PackingList => "packing_list",
        }
    }

    /// Top-level arrays that must be present for the shape to be valid.
    ///
    /// Empty arrays are acceptable: tolerance is structural, not semantic.
    pub fn required_arrays(&self) -> &'static [&'static str] {
        match self {
            ArtifactKind::TripPlan => &["suggestedActivities", "dailyItinerary", "tips"],
            ArtifactKind::PackingList => &["categories"],
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// A shape-validated artifact.
///
/// Holds the JSON value exactly as parsed from the model response; the
/// orchestrator returns it unchanged on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedArtifact {
    /// Which artifact shape was validated
    kind: ArtifactKind,
    /// The parsed JSON object
    value: JsonValue,
}

impl ParsedArtifact {
    /// Wraps an already shape-validated JSON value.
    pub fn new(kind: ArtifactKind, value: JsonValue) -> Self {
        Self { kind, value }
    }

    /// Which artifact shape was validated.
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// The parsed JSON object, as returned by the model.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Consumes the artifact, yielding the raw JSON value.
    pub fn into_value(self) -> JsonValue {
        self.value
    }

    /// Typed view of a trip plan. `None` for packing-list artifacts.
    pub fn as_trip_plan(&self) -> Option<TripPlan> {
        match self.kind {
            ArtifactKind::TripPlan => serde_json::from_value(self.value.clone()).ok(),
            ArtifactKind::PackingList => None,
        }
    }

    /// Typed view of a packing list. `None` for trip-plan artifacts.
    pub fn as_packing_list(&self) -> Option<PackingList> {
        match self.kind {
            ArtifactKind::PackingList => serde_json::from_value(self.value.clone()).ok(),
            ArtifactKind::TripPlan => None,
        }
    }
}

/// Typed view of a generated trip plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPlan {
    /// Overview paragraph for the trip
    pub overview: String,
    /// Suggested activities referenced by the itinerary
    pub suggested_activities: Vec<SuggestedActivity>,
    /// Day-by-day itinerary
    pub daily_itinerary: Vec<ItineraryDay>,
    /// Trip tips
    pub tips: Vec<String>,
}

/// One suggested activity in a trip plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedActivity {
    /// Stable id referenced from the itinerary
    pub id: String,
    /// Display name
    pub name: String,
    /// Activity category
    pub category: String,
    /// Short description
    pub description: String,
    /// Expected duration, e.g. "2 hours"
    pub duration: String,
    /// Suitable for children
    pub kid_friendly: bool,
    /// Depends on good weather
    pub weather_dependent: bool,
    /// Forecast day names this activity suits best
    pub best_days: Vec<String>,
    /// Why this activity was suggested
    pub reason: String,
}

/// One day in a trip-plan itinerary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDay {
    /// Day label, e.g. "Day 1" or a date
    pub day: String,
    /// Activity ids scheduled for this day
    pub activities: Vec<String>,
    /// Meal suggestions
    pub meals: String,
    /// Free-form notes
    pub notes: String,
}

/// Typed view of a generated packing list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingList {
    /// Packing categories
    pub categories: Vec<PackingCategory>,
}

/// One category in a packing list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingCategory {
    /// Category name, e.g. "Clothing"
    pub name: String,
    /// Items in this category
    pub items: Vec<PackingItem>,
}

/// One item in a packing category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingItem {
    /// Item name
    pub name: String,
    /// Suggested quantity, e.g. "3" or "1 per child"
    pub quantity: String,
    /// Why this item is needed
    pub reason: String,
}
