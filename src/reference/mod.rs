//! Static reference data
//!
//! Lookup tables only. Nothing here is derived or fetched.

pub mod currencies;
pub mod nationalities;
pub mod travel_facts;
pub mod trending;

use serde::Serialize;

pub use currencies::CURRENCIES;
pub use nationalities::NATIONALITIES;
pub use travel_facts::{TRAVEL_FACTS, random_fact};
pub use trending::{TRENDING_PLACES, TrendingPlace};

/// A select option: submitted value plus display label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}
