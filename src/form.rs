//! Search form handling
//!
//! The form arrives as raw strings (HTML form post or JSON body). Validation
//! collects every field error at once so all of them can be shown inline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{SearchCriteria, TravelDates};

pub const FIELD_START_DATE: &str = "start_date";
pub const FIELD_END_DATE: &str = "end_date";
pub const FIELD_NATIONALITY: &str = "nationality";
pub const FIELD_BUDGET: &str = "budget";
pub const FIELD_TRAVELERS: &str = "number_of_travelers";

/// Raw search form values as posted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchForm {
    #[serde(alias = "startDate")]
    pub start_date: String,
    #[serde(alias = "endDate")]
    pub end_date: String,
    pub nationality: String,
    #[serde(deserialize_with = "string_or_number")]
    pub budget: String,
    #[serde(alias = "numberOfTravelers", deserialize_with = "string_or_number")]
    pub number_of_travelers: String,
}

/// JSON clients may send numeric fields as numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => match number.as_f64() {
            // `2.0` is a whole count
            Some(value) if number.is_f64() && value.is_finite() && value.fract() == 0.0 => {
                format!("{value:.0}")
            }
            _ => number.to_string(),
        },
    })
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            nationality: String::new(),
            budget: "1000".to_string(),
            number_of_travelers: "1".to_string(),
        }
    }
}

/// Per-field validation messages keyed by form field name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Lifecycle of one form submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Valid(SearchCriteria),
    Invalid(FieldErrors),
}

impl SearchForm {
    /// Check every field and build the criteria, or report all field errors
    pub fn validate(&self) -> Result<SearchCriteria, FieldErrors> {
        let mut errors = FieldErrors::default();

        let start = parse_date(&self.start_date, FIELD_START_DATE, "Start date", &mut errors);
        let end = parse_date(&self.end_date, FIELD_END_DATE, "End date", &mut errors);

        let nationality = self.nationality.trim();
        if nationality.is_empty() {
            errors.insert(FIELD_NATIONALITY, "Please select your nationality.");
        }

        let budget = self
            .budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b > 0.0);
        if budget.is_none() {
            errors.insert(FIELD_BUDGET, "Budget must be a positive number.");
        }

        let travelers = self
            .number_of_travelers
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1);
        if travelers.is_none() {
            errors.insert(FIELD_TRAVELERS, "Must be at least 1 traveler.");
        }

        let travel_dates = match (start, end) {
            (Some(start), Some(end)) => match TravelDates::new(start, end) {
                Ok(dates) => Some(dates),
                Err(_) => {
                    errors.insert(FIELD_END_DATE, "End date cannot be before start date.");
                    None
                }
            },
            _ => None,
        };

        match (travel_dates, budget, travelers) {
            (Some(travel_dates), Some(budget), Some(number_of_travelers)) if errors.is_empty() => {
                Ok(SearchCriteria {
                    travel_dates,
                    nationality: nationality.to_string(),
                    budget,
                    number_of_travelers,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_date(
    value: &str,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{label} is required."));
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, format!("{label} must be a date in YYYY-MM-DD format."));
            None
        }
    }
}

/// Drives a form through its states
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validate a submission; ends in `Valid` or `Invalid`
    pub fn submit(&mut self, form: &SearchForm) -> &FormState {
        self.state = FormState::Validating;
        self.state = match form.validate() {
            Ok(criteria) => FormState::Valid(criteria),
            Err(errors) => {
                debug!("Search form rejected with {} field errors", errors.len());
                FormState::Invalid(errors)
            }
        };
        &self.state
    }

    /// Back to `Idle`, e.g. after the criteria were handed off
    pub fn reset(&mut self) {
        self.state = FormState::Idle;
    }
}
