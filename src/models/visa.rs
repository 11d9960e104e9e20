//! Visa status, visa classification and the visa check contract

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::TripPlannerError;

/// Structured visa status requested from the model for every destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    /// No visa needed for a tourist stay
    NotRequired,
    /// A visa must be obtained before travel
    Required,
    /// An electronic visa can be obtained online
    EVisa,
    /// A visa is issued on arrival
    OnArrival,
}

impl VisaStatus {
    #[must_use]
    pub fn class(self) -> VisaClass {
        match self {
            VisaStatus::NotRequired => VisaClass::NotRequired,
            VisaStatus::Required | VisaStatus::EVisa | VisaStatus::OnArrival => {
                VisaClass::Required
            }
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VisaStatus::NotRequired => "Visa not required",
            VisaStatus::Required => "Visa required",
            VisaStatus::EVisa => "e-Visa available",
            VisaStatus::OnArrival => "Visa on arrival",
        }
    }
}

/// Two-way grouping used by the listing views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisaClass {
    NotRequired,
    Required,
}

impl VisaClass {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VisaClass::NotRequired => "Visa not required",
            VisaClass::Required => "Visa required",
        }
    }
}

/// Legacy heuristic over free visa text.
///
/// Only text containing "not required" (any case) counts as visa-free; everything
/// else, ambiguous wording included, is treated as needing a visa.
#[must_use]
pub fn classify_visa_text(text: &str) -> VisaClass {
    if text.to_lowercase().contains("not required") {
        VisaClass::NotRequired
    } else {
        VisaClass::Required
    }
}

/// Request shape for the visa check flow
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisaCheckRequest {
    /// The nationality of the traveler.
    pub nationality: String,
    /// The destination country.
    pub destination: String,
}

/// Model reply for the visa check flow
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisaCheckResponse {
    /// Whether a visa is required for the given nationality and destination.
    pub visa_required: bool,
    /// Details about the visa requirements, if any.
    pub visa_details: String,
}

impl Validate for VisaCheckResponse {
    fn validate(&self) -> crate::Result<()> {
        if self.visa_details.trim().is_empty() {
            return Err(TripPlannerError::schema("`visaDetails` must not be empty"));
        }
        Ok(())
    }
}
