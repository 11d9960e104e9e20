//! State of one results page
//!
//! A search bumps the generation counter. Completions carry the generation
//! they were started with and are dropped when a newer search has begun.

use crate::TripPlannerError;
use crate::models::{Destination, SearchCriteria, SuggestionResult, TravelDates};
use crate::reference::travel_facts;

use super::listing::{Listing, partition_suggestions};
use super::multi_country::MultiCountrySelection;

pub const NO_RESULTS_MESSAGE: &str =
    "No destinations matched your criteria. Please try different options.";

#[derive(Debug, Clone)]
pub struct PageState {
    pub loading: bool,
    pub error: Option<String>,
    pub disclaimer: Option<String>,
    pub destinations: Vec<Destination>,
    pub criteria: Option<SearchCriteria>,
    /// Trivia shown while a search is pending
    pub fact: Option<&'static str>,
    pub multi: MultiCountrySelection,
    generation: u64,
    completed: bool,
}

impl PageState {
    #[must_use]
    pub fn new(multi_country_cap: usize) -> Self {
        Self {
            loading: false,
            error: None,
            disclaimer: None,
            destinations: Vec::new(),
            criteria: None,
            fact: None,
            multi: MultiCountrySelection::new(multi_country_cap),
            generation: 0,
            completed: false,
        }
    }

    /// Reset for a new search and return its generation
    pub fn begin_search(&mut self, criteria: SearchCriteria) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.completed = false;
        self.error = None;
        self.disclaimer = None;
        self.destinations.clear();
        self.multi.clear();
        self.criteria = Some(criteria);
        self.fact = Some(travel_facts::random_fact());
        self.generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a successful result; false when the result is stale
    pub fn apply_result(&mut self, generation: u64, result: SuggestionResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.completed = true;
        self.error = None;
        self.destinations = result.destinations;
        self.disclaimer = result
            .disclaimer
            .filter(|text| !text.trim().is_empty());
        true
    }

    /// Record a failed search; no results survive it
    pub fn apply_error(&mut self, generation: u64, error: &TripPlannerError) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.completed = true;
        self.error = Some(error.user_message());
        self.destinations.clear();
        self.disclaimer = None;
        true
    }

    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        partition_suggestions(&self.destinations)
    }

    /// Informational message for a search that succeeded with nothing
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.completed && self.error.is_none() && self.destinations.is_empty())
            .then_some(NO_RESULTS_MESSAGE)
    }

    #[must_use]
    pub fn travel_dates(&self) -> Option<TravelDates> {
        self.criteria.as_ref().map(|c| c.travel_dates)
    }

    #[must_use]
    pub fn travelers(&self) -> Option<u32> {
        self.criteria.as_ref().map(|c| c.number_of_travelers)
    }

    #[must_use]
    pub fn destination(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            travel_dates: TravelDates::new(
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            )
            .unwrap(),
            nationality: "Brazilian".to_string(),
            budget: 2000.0,
            number_of_travelers: 2,
        }
    }

    fn result(countries: &[&str]) -> SuggestionResult {
        SuggestionResult {
            destinations: countries
                .iter()
                .map(|country| Destination {
                    country: (*country).to_string(),
                    average_flight_price: 400.0,
                    estimated_expenses: 800.0,
                    visa_requirements: "Visa not required".to_string(),
                    itinerary: String::new(),
                    detailed_expenses: None,
                    is_premium_option: None,
                    visa_status: None,
                })
                .collect(),
            disclaimer: Some("Prices are estimates.".to_string()),
        }
    }

    #[test]
    fn test_begin_search_clears_previous_state() {
        let mut state = PageState::new(4);
        let first = state.begin_search(criteria());
        state.apply_result(first, result(&["Chile", "Peru"]));
        state.multi.select("Chile");

        let second = state.begin_search(criteria());
        assert_eq!(second, first + 1);
        assert!(state.loading);
        assert!(state.destinations.is_empty());
        assert!(state.disclaimer.is_none());
        assert!(state.multi.is_empty());
        assert!(state.fact.is_some());
        assert_eq!(state.empty_message(), None);
    }

    #[test]
    fn test_error_leaves_no_stale_results() {
        let mut state = PageState::new(4);
        let first = state.begin_search(criteria());
        state.apply_result(first, result(&["Chile"]));

        let second = state.begin_search(criteria());
        assert!(state.apply_error(second, &TripPlannerError::api("connection refused")));
        assert!(!state.loading);
        assert!(state.destinations.is_empty());
        assert!(state.error.as_deref().unwrap().contains("connection refused"));
        assert_eq!(state.empty_message(), None);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = PageState::new(4);
        let old = state.begin_search(criteria());
        let current = state.begin_search(criteria());

        assert!(!state.apply_result(old, result(&["Old"])));
        assert!(state.loading);
        assert!(state.apply_result(current, result(&["New"])));
        assert_eq!(state.destinations[0].country, "New");
        assert!(!state.apply_error(old, &TripPlannerError::api("late failure")));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_success_message() {
        let mut state = PageState::new(4);
        assert_eq!(state.empty_message(), None);
        let generation = state.begin_search(criteria());
        state.apply_result(generation, SuggestionResult::default());
        assert_eq!(state.empty_message(), Some(NO_RESULTS_MESSAGE));
    }
}
