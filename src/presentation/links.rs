//! Outbound links shown on destination cards

use crate::models::TravelDates;

const FLIGHTS_URL: &str = "https://www.google.com/travel/flights";
const MAPS_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Flight search deep link for a destination
#[must_use]
pub fn flight_search_url(country: &str, dates: Option<&TravelDates>, travelers: Option<u32>) -> String {
    let mut query = format!("Flights to {country}");
    if let Some(dates) = dates {
        query.push_str(&format!(" on {} through {}", dates.start_str(), dates.end_str()));
    }
    if let Some(travelers) = travelers {
        let noun = if travelers == 1 { "adult" } else { "adults" };
        query.push_str(&format!(" for {travelers} {noun}"));
    }
    format!("{FLIGHTS_URL}?q={}", urlencoding::encode(&query))
}

#[must_use]
pub fn map_url(country: &str) -> String {
    format!("{MAPS_URL}{}", urlencoding::encode(country))
}
