//! Multi-country trip selection
//!
//! The selection is keyed by country name and bounded by a cap. Selecting past
//! the cap does nothing; the caller decides how to tell the user.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Destination;

use super::listing::{ListedDestination, sorted_by_flight_price};

/// Outcome of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// The cap was already reached; nothing changed
    CapReached,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiCountrySelection {
    cap: usize,
    countries: Vec<String>,
}

impl MultiCountrySelection {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            countries: Vec::new(),
        }
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.countries.len() >= self.cap
    }

    /// Add a country; returns false when already present or at the cap
    pub fn select(&mut self, country: &str) -> bool {
        if self.is_selected(country) || self.is_full() {
            return false;
        }
        self.countries.push(country.to_string());
        true
    }

    /// Remove a country; returns false when it was not selected
    pub fn deselect(&mut self, country: &str) -> bool {
        let before = self.countries.len();
        self.countries.retain(|c| c != country);
        self.countries.len() != before
    }

    pub fn toggle(&mut self, country: &str) -> SelectionChange {
        if self.deselect(country) {
            SelectionChange::Deselected
        } else if self.select(country) {
            SelectionChange::Selected
        } else {
            debug!("Ignoring selection of {country}: cap of {} reached", self.cap);
            SelectionChange::CapReached
        }
    }

    pub fn clear(&mut self) {
        self.countries.clear();
    }

    /// Combined itineraries need at least two countries
    #[must_use]
    pub fn can_view_itineraries(&self) -> bool {
        (2..=self.cap).contains(&self.countries.len())
    }

    /// Selected destinations in candidate order (cheapest flight first)
    #[must_use]
    pub fn selected<'a>(&self, destinations: &'a [Destination]) -> Vec<ListedDestination<'a>> {
        let mut seen: Vec<&str> = Vec::new();
        sorted_by_flight_price(destinations)
            .into_iter()
            .filter(|entry| {
                let country = entry.destination.country.as_str();
                if self.is_selected(country) && !seen.contains(&country) {
                    seen.push(country);
                    true
                } else {
                    false
                }
            })
            .collect()
    }

    /// Sum of on-ground expenses plus flight price over the selection
    #[must_use]
    pub fn total_cost(&self, destinations: &[Destination]) -> f64 {
        self.selected(destinations)
            .iter()
            .map(|entry| entry.destination.trip_cost())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(country: &str, flight: f64, expenses: f64) -> Destination {
        Destination {
            country: country.to_string(),
            average_flight_price: flight,
            estimated_expenses: expenses,
            visa_requirements: "Visa required".to_string(),
            itinerary: format!("<table><tr><td>{country}</td></tr></table>"),
            detailed_expenses: None,
            is_premium_option: None,
            visa_status: None,
        }
    }

    fn five() -> Vec<Destination> {
        vec![
            destination("Spain", 500.0, 1500.0),
            destination("Italy", 550.0, 1600.0),
            destination("Greece", 450.0, 1200.0),
            destination("Croatia", 480.0, 1100.0),
            destination("Malta", 420.0, 900.0),
        ]
    }

    #[test]
    fn test_fifth_selection_is_noop_with_cap_four() {
        let destinations = five();
        let mut selection = MultiCountrySelection::new(4);
        for d in &destinations[..4] {
            assert_eq!(selection.toggle(&d.country), SelectionChange::Selected);
        }
        let before = selection.clone();

        assert_eq!(selection.toggle("Malta"), SelectionChange::CapReached);
        assert_eq!(selection, before);
        assert!(!selection.is_selected("Malta"));
        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn test_total_cost_sums_expenses_and_flights() {
        let destinations = five();
        let mut selection = MultiCountrySelection::new(4);
        selection.select("Spain");
        selection.select("Greece");
        assert_eq!(selection.total_cost(&destinations), 500.0 + 1500.0 + 450.0 + 1200.0);
    }

    #[test]
    fn test_deselect_by_country() {
        let mut selection = MultiCountrySelection::new(4);
        selection.select("Spain");
        selection.select("Italy");
        assert_eq!(selection.toggle("Spain"), SelectionChange::Deselected);
        assert!(!selection.is_selected("Spain"));
        assert!(!selection.deselect("Spain"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_can_view_needs_two() {
        let mut selection = MultiCountrySelection::new(4);
        assert!(!selection.can_view_itineraries());
        selection.select("Spain");
        assert!(!selection.can_view_itineraries());
        selection.select("Italy");
        assert!(selection.can_view_itineraries());
    }

    #[test]
    fn test_selected_in_flight_price_order() {
        let destinations = five();
        let mut selection = MultiCountrySelection::new(4);
        selection.select("Italy");
        selection.select("Malta");
        selection.select("Spain");
        let countries: Vec<_> = selection
            .selected(&destinations)
            .iter()
            .map(|e| e.destination.country.as_str())
            .collect();
        assert_eq!(countries, vec!["Malta", "Spain", "Italy"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = MultiCountrySelection::new(2);
        assert!(selection.select("Spain"));
        assert!(!selection.select("Spain"));
        assert_eq!(selection.len(), 1);
    }
}
