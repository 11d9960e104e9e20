//! Standalone itinerary generation contract

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::TripPlannerError;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    /// The desired travel destination.
    pub destination: String,
    /// The travel dates, potentially a range (e.g. "YYYY-MM-DD to YYYY-MM-DD").
    pub travel_dates: String,
    /// Optional comma-separated list of interests, e.g. history, food, adventure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
}

impl ItineraryRequest {
    /// Interests with surrounding whitespace removed; blank counts as absent
    #[must_use]
    pub fn interests(&self) -> Option<&str> {
        self.interests
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    /// A detailed day-by-day itinerary formatted as a well-formed HTML table with
    /// columns "Day", "Morning Activity", "Afternoon Activity", "Evening Activity" and
    /// "Notes". Basic table tags only, no CSS.
    pub itinerary: String,
}

impl Validate for ItineraryResponse {
    fn validate(&self) -> crate::Result<()> {
        if self.itinerary.trim().is_empty() {
            return Err(TripPlannerError::schema("`itinerary` must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_interests_are_absent() {
        let request = ItineraryRequest {
            destination: "Peru".to_string(),
            travel_dates: "2025-06-01 to 2025-06-05".to_string(),
            interests: Some("   ".to_string()),
        };
        assert_eq!(request.interests(), None);

        let request = ItineraryRequest {
            interests: Some(" food, hiking ".to_string()),
            ..request
        };
        assert_eq!(request.interests(), Some("food, hiking"));
    }

    #[test]
    fn test_empty_itinerary_is_rejected() {
        let response = ItineraryResponse {
            itinerary: String::new(),
        };
        assert!(response.validate().is_err());
    }
}
