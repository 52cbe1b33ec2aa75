//! Trip context supplied by the caller.
//!
//! Inputs are assumed pre-sanitized by the caller (bounded length,
//! stripped markup, numeric fields clamped); this pipeline does not
//! re-validate them.

use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable trip facts for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct TripContext {
    /// Destination, e.g. "Austin, TX"
    destination: String,
    /// First day of the trip
    start_date: NaiveDate,
    /// Last day of the trip
    end_date: NaiveDate,
    /// Requested activity interests
    #[builder(default)]
    activities: Vec<String>,
    /// Children travelling on the trip
    #[builder(default)]
    children: Vec<ChildProfile>,
}

impl TripContext {
    /// Creates a builder for `TripContext`.
    pub fn builder() -> TripContextBuilder {
        TripContextBuilder::default()
    }

    /// Number of trip days, inclusive of both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A child travelling on the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ChildProfile {
    /// Age in years
    age: u8,
    /// Weight in pounds, if known
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_lb: Option<f64>,
    /// Height in inches, if known
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    height_in: Option<f64>,
}

impl ChildProfile {
    /// Creates a builder for `ChildProfile`.
    pub fn builder() -> ChildProfileBuilder {
        ChildProfileBuilder::default()
    }
}
