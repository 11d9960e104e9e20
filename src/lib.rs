//! Smart Trip Planner - AI-assisted travel destination planning
//!
//! This library collects a traveler's search criteria, asks a hosted language
//! model for destination suggestions, visa guidance and itineraries through
//! typed prompt contracts, and renders the replies as HTML pages and JSON.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod llm;
pub mod logging;
pub mod models;
pub mod pages;
pub mod presentation;
pub mod prompts;
pub mod reference;
pub mod web;

// Re-export core types for public API
pub use config::TripPlannerConfig;
pub use dispatcher::Dispatcher;
pub use error::TripPlannerError;
pub use form::{FieldErrors, FormController, FormState, SearchForm};
pub use llm::ChatClient;
pub use models::{
    Destination, DetailedExpenses, SearchCriteria, SuggestionResult, TravelDates, VisaStatus,
};
pub use presentation::{MultiCountrySelection, PageState};
pub use web::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlannerError>;
