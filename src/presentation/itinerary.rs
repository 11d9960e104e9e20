use crate::models::{Destination, TravelDates};

pub const EMPTY_ITINERARY: &str = "No detailed itinerary provided for this destination.";

/// One destination's itinerary as shown in the itinerary dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryView<'a> {
    pub country: &'a str,
    markup: &'a str,
    pub travel_dates: Option<TravelDates>,
}

impl<'a> ItineraryView<'a> {
    #[must_use]
    pub fn new(destination: &'a Destination, travel_dates: Option<TravelDates>) -> Self {
        Self {
            country: &destination.country,
            markup: &destination.itinerary,
            travel_dates,
        }
    }

    /// Model-provided markup, inserted as-is
    #[must_use]
    pub fn markup(&self) -> Option<&'a str> {
        let trimmed = self.markup.trim();
        (!trimmed.is_empty()).then_some(self.markup)
    }

    #[must_use]
    pub fn dates_line(&self) -> Option<String> {
        self.travel_dates
            .map(|dates| format!("Travel dates: {} ({} days)", dates, dates.days()))
    }
}
