//! Presentation layer
//!
//! Turns model output held in a [`PageState`] into what the user sees: ordered
//! listings, the multi-country combiner, itinerary views, outbound links and
//! the HTML pages themselves.

pub mod html;
pub mod itinerary;
pub mod links;
pub mod listing;
pub mod multi_country;
pub mod page_state;

pub use itinerary::ItineraryView;
pub use listing::{ListedDestination, Listing, group_by_visa, partition_suggestions};
pub use multi_country::{MultiCountrySelection, SelectionChange};
pub use page_state::PageState;
