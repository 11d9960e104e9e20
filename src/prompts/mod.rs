//! Prompt templates and their input/output contracts
//!
//! Each prompt pairs a request shape with the response shape the model must
//! return. The rendered user message embeds the JSON Schema of the response
//! (generated with `schemars`) so the reply can be deserialized directly.

pub mod check_visa;
pub mod generate_itinerary;
pub mod suggest_destinations;

pub use check_visa::CheckVisaPrompt;
pub use generate_itinerary::GenerateItineraryPrompt;
pub use suggest_destinations::SuggestDestinationsPrompt;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::Validate;

/// System message shared by every prompt
pub const SYSTEM_PROMPT: &str = "\
You are an expert travel planner and travel agent. You answer with a single JSON \
object and nothing else: no prose, no markdown, no code fences. All monetary values \
are numbers in USD.";

/// Table layout requested for every generated itinerary
pub const ITINERARY_TABLE_FORMAT: &str = "\
Format the itinerary as a well-formed HTML table. \
The table should have columns: \"Day\", \"Morning Activity\", \"Afternoon Activity\", \
\"Evening Activity\", and \"Notes\". \
Use only basic HTML tags like <table>, <thead>, <tbody>, <tr>, <th>, and <td>. \
Do not include any CSS styles or attributes like <style> tags or inline styles. \
Ensure the HTML is valid.";

/// A templated request to the model with a typed reply
pub trait Prompt: Send + Sync {
    type Input: Serialize + Send + Sync;
    type Output: DeserializeOwned + JsonSchema + Validate + Send;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Natural-language instructions with the input substituted
    fn instructions(&self, input: &Self::Input) -> String;

    fn system(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Full user message: instructions followed by the output contract
    fn render(&self, input: &Self::Input) -> String {
        format!(
            "{}\n\nRespond with a JSON object that conforms to this JSON Schema:\n{}",
            self.instructions(input),
            output_schema::<Self::Output>()
        )
    }
}

/// Pretty-printed JSON Schema for a response type
#[must_use]
pub fn output_schema<T: JsonSchema>() -> String {
    let schema = schemars::schema_for!(T);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
