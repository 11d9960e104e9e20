//! Suggested destinations as returned by the model

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::visa::{VisaClass, VisaStatus, classify_visa_text};
use super::{Validate, check_amount};
use crate::TripPlannerError;

/// One suggested destination. Every value is produced by the model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// The suggested country.
    pub country: String,
    /// Average flight price in USD, per person.
    pub average_flight_price: f64,
    /// Total estimated on-ground expenses for the trip in USD (accommodation, food,
    /// activities; excluding flights) for the specified travelers and duration.
    pub estimated_expenses: f64,
    /// Visa requirements for the nationality (e.g. "Visa required", "Visa not required
    /// for stays up to 90 days", "e-Visa available").
    pub visa_requirements: String,
    /// Recommended day-by-day itinerary as a well-formed HTML table with columns
    /// "Day", "Morning Activity", "Afternoon Activity", "Evening Activity" and "Notes".
    pub itinerary: String,
    /// Optional detailed breakdown of the on-ground expenses in USD. The sum should
    /// match `estimatedExpenses`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_expenses: Option<DetailedExpenses>,
    /// Whether this is a premium/higher-budget option (about 25-50% above budget).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium_option: Option<bool>,
    /// Structured visa status for the traveler's nationality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_status: Option<VisaStatus>,
}

impl Destination {
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_premium_option.unwrap_or(false)
    }

    /// Structured status when the model supplied one, text heuristic otherwise
    #[must_use]
    pub fn visa_class(&self) -> VisaClass {
        match self.visa_status {
            Some(status) => status.class(),
            None => classify_visa_text(&self.visa_requirements),
        }
    }

    /// On-ground expenses plus the flight price
    #[must_use]
    pub fn trip_cost(&self) -> f64 {
        self.estimated_expenses + self.average_flight_price
    }
}

impl Validate for Destination {
    fn validate(&self) -> crate::Result<()> {
        if self.country.trim().is_empty() {
            return Err(TripPlannerError::schema("`country` must not be empty"));
        }
        check_amount("averageFlightPrice", self.average_flight_price)?;
        check_amount("estimatedExpenses", self.estimated_expenses)?;
        if let Some(details) = &self.detailed_expenses {
            details.validate()?;
        }
        Ok(())
    }
}

/// Breakdown of on-ground expenses in USD
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedExpenses {
    /// Estimated cost for food in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<f64>,
    /// Estimated cost for accommodation/stay in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stay: Option<f64>,
    /// Estimated cost for sightseeing and activities in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sightseeing: Option<f64>,
    /// Estimated budget for shopping in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping: Option<f64>,
    /// Estimated cost for local transportation in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<f64>,
}

impl DetailedExpenses {
    /// Present categories in display order
    #[must_use]
    pub fn items(&self) -> Vec<(&'static str, f64)> {
        [
            ("Food", self.food),
            ("Stay", self.stay),
            ("Sightseeing", self.sightseeing),
            ("Shopping", self.shopping),
            ("Transport", self.transport),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Sum of the present categories
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items().iter().map(|(_, v)| v).sum()
    }
}

impl Validate for DetailedExpenses {
    fn validate(&self) -> crate::Result<()> {
        for (label, value) in self.items() {
            check_amount(&format!("detailedExpenses.{}", label.to_lowercase()), value)?;
        }
        Ok(())
    }
}

/// The model's full reply to a destination search
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub destinations: Vec<Destination>,
    /// Optional disclaimer regarding data accuracy or estimations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl Validate for SuggestionResult {
    fn validate(&self) -> crate::Result<()> {
        for (index, destination) in self.destinations.iter().enumerate() {
            destination.validate().map_err(|e| match e {
                TripPlannerError::Schema { message } => {
                    TripPlannerError::schema(format!("destinations[{index}]: {message}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "destinations": [
            {
                "country": "Portugal",
                "averageFlightPrice": 650,
                "estimatedExpenses": 1200.5,
                "visaRequirements": "Visa not required for stays up to 90 days",
                "itinerary": "<table><tr><td>Day 1</td></tr></table>",
                "detailedExpenses": {"food": 300, "stay": 600, "transport": 100.5, "sightseeing": 200},
                "isPremiumOption": false
            },
            {
                "country": "Japan",
                "averageFlightPrice": 1400,
                "estimatedExpenses": 2500,
                "visaRequirements": "Visa required",
                "itinerary": "",
                "isPremiumOption": true,
                "visaStatus": "e_visa"
            }
        ],
        "disclaimer": "All prices are estimates in USD and subject to change."
    }"#;

    #[test]
    fn test_deserialize_model_reply() {
        let result: SuggestionResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.destinations.len(), 2);
        assert!(result.validate().is_ok());

        let portugal = &result.destinations[0];
        assert!(!portugal.is_premium());
        assert_eq!(portugal.visa_class(), VisaClass::NotRequired);
        assert_eq!(portugal.trip_cost(), 1850.5);
        let details = portugal.detailed_expenses.as_ref().unwrap();
        assert_eq!(details.total(), 1200.5);
        assert_eq!(details.items().len(), 4);

        let japan = &result.destinations[1];
        assert!(japan.is_premium());
        assert_eq!(japan.visa_status, Some(VisaStatus::EVisa));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let reply = r#"{"destinations": [{"country": "Peru", "averageFlightPrice": 900}]}"#;
        assert!(serde_json::from_str::<SuggestionResult>(reply).is_err());
    }

    #[test]
    fn test_structured_status_wins_over_text() {
        let destination = Destination {
            country: "Kenya".to_string(),
            average_flight_price: 800.0,
            estimated_expenses: 1000.0,
            visa_requirements: "Visa not required".to_string(),
            itinerary: String::new(),
            detailed_expenses: None,
            is_premium_option: None,
            visa_status: Some(VisaStatus::EVisa),
        };
        assert_eq!(destination.visa_class(), VisaClass::Required);
        assert!(!destination.is_premium());
    }

    #[test]
    fn test_validation_reports_destination_index() {
        let mut result: SuggestionResult = serde_json::from_str(SAMPLE).unwrap();
        result.destinations[1].estimated_expenses = -5.0;
        let err = result.validate().unwrap_err();
        assert!(err.to_string().contains("destinations[1]"));
        assert!(err.to_string().contains("estimatedExpenses"));
    }

    #[test]
    fn test_validation_rejects_blank_country() {
        let mut result: SuggestionResult = serde_json::from_str(SAMPLE).unwrap();
        result.destinations[0].country = " ".to_string();
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result: SuggestionResult = serde_json::from_str(r#"{"destinations": []}"#).unwrap();
        assert!(result.validate().is_ok());
        assert!(result.disclaimer.is_none());
    }
}
