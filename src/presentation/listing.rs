//! Ordering and grouping of suggested destinations for display

use std::collections::BTreeMap;

use crate::models::{Destination, VisaClass};

/// A destination together with its position in the model's reply.
///
/// The position is the stable handle used in URLs (itinerary view, multi-country
/// toggles), so re-sorting never changes which destination a link points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListedDestination<'a> {
    pub index: usize,
    pub destination: &'a Destination,
}

/// Primary and premium suggestions, each cheapest flight first
#[derive(Debug, Default, PartialEq)]
pub struct Listing<'a> {
    pub primary: Vec<ListedDestination<'a>>,
    pub premium: Vec<ListedDestination<'a>>,
}

impl Listing<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.premium.is_empty()
    }

    /// The combined-trip action only makes sense with several primary options
    #[must_use]
    pub fn offers_multi_country(&self) -> bool {
        self.primary.len() > 1
    }
}

/// Split destinations on the premium flag and sort both groups
#[must_use]
pub fn partition_suggestions(destinations: &[Destination]) -> Listing<'_> {
    let (mut premium, mut primary): (Vec<_>, Vec<_>) = destinations
        .iter()
        .enumerate()
        .map(|(index, destination)| ListedDestination { index, destination })
        .partition(|entry| entry.destination.is_premium());

    sort_by_flight_price(&mut primary);
    sort_by_flight_price(&mut premium);
    Listing { primary, premium }
}

/// Every destination, cheapest flight first
#[must_use]
pub fn sorted_by_flight_price(destinations: &[Destination]) -> Vec<ListedDestination<'_>> {
    let mut all: Vec<_> = destinations
        .iter()
        .enumerate()
        .map(|(index, destination)| ListedDestination { index, destination })
        .collect();
    sort_by_flight_price(&mut all);
    all
}

/// Stable ascending sort; `total_cmp` keeps odd values from panicking
pub fn sort_by_flight_price(entries: &mut [ListedDestination<'_>]) {
    entries.sort_by(|a, b| {
        a.destination
            .average_flight_price
            .total_cmp(&b.destination.average_flight_price)
    });
}

/// Group entries by visa classification, preserving their order
#[must_use]
pub fn group_by_visa<'a>(
    entries: &[ListedDestination<'a>],
) -> BTreeMap<VisaClass, Vec<ListedDestination<'a>>> {
    let mut groups: BTreeMap<VisaClass, Vec<ListedDestination<'a>>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.destination.visa_class())
            .or_default()
            .push(*entry);
    }
    groups
}
