//! Prompt construction for the three fallback tiers.
//!
//! Pure functions: trip context plus forecast in, system/user pair out.
//! The system text carries instructions and the target schema; the user
//! text carries only trip-specific data, so injected content in
//! user-supplied fields cannot override generation instructions.

use std::fmt::Write;
use tripsmith_core::{
    ArtifactKind, PromptPair, PromptVariant, TripContext, WeatherForecast,
};

/// Character budget for the repair tier's user content.
pub const REPAIR_INPUT_CHAR_BUDGET: usize = 8_000;

const JSON_ONLY_INSTRUCTION: &str =
    "Respond with a single JSON object and nothing else. No markdown fences, no commentary, \
     no text before or after the JSON.";

/// Builds the prompt pair for the primary or compact tier.
pub fn build(
    kind: ArtifactKind,
    trip: &TripContext,
    weather: &WeatherForecast,
    variant: PromptVariant,
) -> PromptPair {
    let mut system = String::new();
    system.push_str(role_instruction(kind));
    system.push_str("\n\n");
    system.push_str(schema_description(kind));
    if variant == PromptVariant::Compact {
        system.push_str("\n\n");
        system.push_str(compact_guardrails(kind));
    }
    system.push_str("\n\n");
    system.push_str(JSON_ONLY_INSTRUCTION);

    PromptPair::new(system, render_trip(trip, weather), variant)
}

/// Builds the repair-tier prompt over a previous raw response.
///
/// The user content is the prior response truncated to
/// [`REPAIR_INPUT_CHAR_BUDGET`] characters; the system text instructs
/// the backend to return corrected JSON matching the same schema and
/// nothing else.
pub fn build_repair(kind: ArtifactKind, raw_response: &str) -> PromptPair {
    let mut system = String::new();
    system.push_str(
        "The text below was meant to be a JSON object but is malformed, wrapped, or \
         incomplete. Return the corrected JSON object matching this schema, and nothing else.",
    );
    system.push_str("\n\n");
    system.push_str(schema_description(kind));
    system.push_str("\n\n");
    system.push_str(JSON_ONLY_INSTRUCTION);

    PromptPair::new(
        system,
        truncate_chars(raw_response, REPAIR_INPUT_CHAR_BUDGET),
        PromptVariant::Compact,
    )
}

fn role_instruction(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::TripPlan => {
            "You are a family travel planner. Using the trip facts and weather forecast \
             provided by the user, produce a day-by-day trip plan. Schedule weather-dependent \
             activities on the most suitable forecast days and prefer kid-friendly options \
             when children are travelling."
        }
        ArtifactKind::PackingList => {
            "You are a family travel packing assistant. Using the trip facts and weather \
             forecast provided by the user, produce a categorized packing list. Account for \
             the forecast conditions, the planned activities, and the ages of any children."
        }
    }
}

fn schema_description(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::TripPlan => {
            r#"The JSON object must have exactly this shape:
{
  "overview": string,
  "suggestedActivities": [
    {
      "id": string,
      "name": string,
      "category": string,
      "description": string,
      "duration": string,
      "kidFriendly": boolean,
      "weatherDependent": boolean,
      "bestDays": [string],
      "reason": string
    }
  ],
  "dailyItinerary": [
    { "day": string, "activities": [string of activity ids], "meals": string, "notes": string }
  ],
  "tips": [string]
}"#
        }
        ArtifactKind::PackingList => {
            r#"The JSON object must have exactly this shape:
{
  "categories": [
    {
      "name": string,
      "items": [ { "name": string, "quantity": string, "reason": string } ]
    }
  ]
}"#
        }
    }
}

fn compact_guardrails(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::TripPlan => {
            "Keep the output small: at most 6 suggested activities, at most 2 activities per \
             itinerary day, and keep every description, reason, meals, and notes field under \
             20 words."
        }
        ArtifactKind::PackingList => {
            "Keep the output small: at most 5 categories, at most 6 items per category, and \
             keep every reason field under 20 words."
        }
    }
}

/// Renders the sanitized trip facts as the user message.
fn render_trip(trip: &TripContext, weather: &WeatherForecast) -> String {
    let mut user = String::new();
    let _ = writeln!(user, "Destination: {}", trip.destination());
    let _ = writeln!(
        user,
        "Dates: {} to {} ({} days)",
        trip.start_date(),
        trip.end_date(),
        trip.day_count()
    );

    if !trip.activities().is_empty() {
        let _ = writeln!(user, "Requested activities: {}", trip.activities().join(", "));
    }

    if !trip.children().is_empty() {
        let _ = writeln!(user, "Children:");
        for child in trip.children() {
            let mut line = format!("- age {}", child.age());
            if let Some(weight) = child.weight_lb() {
                let _ = write!(line, ", {} lb", weight);
            }
            if let Some(height) = child.height_in() {
                let _ = write!(line, ", {} in", height);
            }
            let _ = writeln!(user, "{}", line);
        }
    }

    let _ = writeln!(user, "Weather summary: {}", weather.summary());
    if !weather.periods().is_empty() {
        let _ = writeln!(user, "Forecast:");
        for period in weather.periods() {
            let _ = writeln!(
                user,
                "- {}: high {}F, low {}F, {}, {}% precipitation",
                period.name(),
                period.high(),
                period.low(),
                period.condition(),
                period.precipitation()
            );
        }
    }

    user
}

/// Truncates to a character budget without splitting a code point.
fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
