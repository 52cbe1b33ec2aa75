//! Weather forecast input.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Forecast for the trip window, produced by an external weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct WeatherForecast {
    /// One-line summary of the forecast window
    summary: String,
    /// Per-period forecast entries
    #[builder(default)]
    periods: Vec<ForecastPeriod>,
}

impl WeatherForecast {
    /// Creates a builder for `WeatherForecast`.
    pub fn builder() -> WeatherForecastBuilder {
        WeatherForecastBuilder::default()
    }
}

/// One forecast period (typically a day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ForecastPeriod {
    /// Period name, e.g. "Monday"
    name: String,
    /// High temperature in Fahrenheit
    high: i32,
    /// Low temperature in Fahrenheit
    low: i32,
    /// Condition description, e.g. "Sunny"
    condition: String,
    /// Precipitation chance in percent
    precipitation: u8,
}

impl ForecastPeriod {
    /// Creates a builder for `ForecastPeriod`.
    pub fn builder() -> ForecastPeriodBuilder {
        ForecastPeriodBuilder::default()
    }
}
