//! Data models for the trip planner
//!
//! This module contains the request and response contracts exchanged with the
//! model provider, organized by concern:
//! - Criteria: the traveler's validated search input and its request shape
//! - Destination: suggested destinations and their cost breakdown
//! - Visa: visa status enumeration, classification and the visa check contract
//! - Itinerary: the standalone itinerary generation contract

pub mod criteria;
pub mod destination;
pub mod itinerary;
pub mod visa;

pub use criteria::{SearchCriteria, SuggestDestinationsInput, TravelDates};
pub use destination::{DetailedExpenses, Destination, SuggestionResult};
pub use itinerary::{ItineraryRequest, ItineraryResponse};
pub use visa::{VisaCheckRequest, VisaCheckResponse, VisaClass, VisaStatus, classify_visa_text};

/// Shape checks applied to model output after deserialization
pub trait Validate {
    fn validate(&self) -> crate::Result<()>;
}

/// Money fields coming back from the model must be usable numbers
pub(crate) fn check_amount(field: &str, value: f64) -> crate::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(crate::TripPlannerError::schema(format!(
            "`{field}` must be a non-negative number, got {value}"
        )))
    }
}
