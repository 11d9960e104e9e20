//! Search criteria and the request shape sent to the model

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TripPlannerError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const RANGE_SEPARATOR: &str = " to ";

/// Inclusive travel date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TravelDates {
    /// Create a range, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> crate::Result<Self> {
        if end < start {
            return Err(TripPlannerError::validation(
                "End date cannot be before start date.",
            ));
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days covered, both ends included
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    #[must_use]
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl Display for TravelDates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", self.start_str(), self.end_str())
    }
}

impl FromStr for TravelDates {
    type Err = TripPlannerError;

    /// Parse `"YYYY-MM-DD to YYYY-MM-DD"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.trim().split_once(RANGE_SEPARATOR).ok_or_else(|| {
            TripPlannerError::validation(format!(
                "Travel dates must look like 'YYYY-MM-DD to YYYY-MM-DD', got '{s}'"
            ))
        })?;
        let parse = |value: &str| {
            NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
                TripPlannerError::validation(format!("Invalid date '{}': {e}", value.trim()))
            })
        };
        Self::new(parse(start)?, parse(end)?)
    }
}

/// A traveler's validated search, immutable once submitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCriteria {
    pub travel_dates: TravelDates,
    pub nationality: String,
    /// Trip budget in USD
    pub budget: f64,
    pub number_of_travelers: u32,
}

impl SearchCriteria {
    /// Build the request shape substituted into the suggestion prompt
    #[must_use]
    pub fn to_request(&self) -> SuggestDestinationsInput {
        SuggestDestinationsInput::from(self)
    }
}

/// Request shape for a destination suggestion
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestDestinationsInput {
    /// The travel dates as a range, e.g. "2025-06-01 to 2025-06-10".
    pub travel_dates: String,
    /// The traveler's nationality.
    pub nationality: String,
    /// The budget for the trip in USD. All monetary outputs should also be in USD.
    pub budget: f64,
    /// The number of travelers.
    pub number_of_travelers: u32,
}

impl From<&SearchCriteria> for SuggestDestinationsInput {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            travel_dates: criteria.travel_dates.to_string(),
            nationality: criteria.nationality.clone(),
            budget: criteria.budget,
            number_of_travelers: criteria.number_of_travelers,
        }
    }
}

impl TryFrom<SuggestDestinationsInput> for SearchCriteria {
    type Error = TripPlannerError;

    fn try_from(input: SuggestDestinationsInput) -> Result<Self, Self::Error> {
        Ok(Self {
            travel_dates: input.travel_dates.parse()?,
            nationality: input.nationality,
            budget: input.budget,
            number_of_travelers: input.number_of_travelers,
        })
    }
}
