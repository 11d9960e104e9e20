//! JSON API
//!
//! Same operations as the HTML pages, for programmatic clients. Field errors
//! map to 422, failures of the model call to 502.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::TripPlannerError;
use crate::form::{FieldErrors, SearchForm};
use crate::models::{
    ItineraryRequest, ItineraryResponse, SuggestionResult, VisaCheckRequest, VisaCheckResponse,
};
use crate::reference::{self, CURRENCIES, NATIONALITIES, SelectOption, TRENDING_PLACES, TrendingPlace};
use crate::web::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(suggestions))
        .route("/itinerary", post(itinerary))
        .route("/visa", post(visa))
        .route("/nationalities", get(nationalities))
        .route("/currencies", get(currencies))
        .route("/trending", get(trending))
        .route("/facts/random", get(random_fact))
}

pub enum ApiError {
    Invalid(FieldErrors),
    Failed(TripPlannerError),
}

impl From<TripPlannerError> for ApiError {
    fn from(error: TripPlannerError) -> Self {
        Self::Failed(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Failed(error) => {
                let status = if error.is_request_failure() {
                    StatusCode::BAD_GATEWAY
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                warn!("API request failed: {error}");
                (status, Json(json!({ "error": error.user_message() }))).into_response()
            }
        }
    }
}

fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

async fn suggestions(
    State(state): State<AppState>,
    Json(form): Json<SearchForm>,
) -> Result<Json<SuggestionResult>, ApiError> {
    let criteria = form.validate().map_err(ApiError::Invalid)?;
    let result = state.dispatcher.suggest_destinations(&criteria).await?;
    Ok(Json(result))
}

async fn itinerary(
    State(state): State<AppState>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    let mut errors = FieldErrors::default();
    require(&mut errors, "destination", &request.destination, "Destination is required.");
    require(&mut errors, "travelDates", &request.travel_dates, "Travel dates are required.");
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }
    Ok(Json(state.dispatcher.generate_itinerary(&request).await?))
}

async fn visa(
    State(state): State<AppState>,
    Json(request): Json<VisaCheckRequest>,
) -> Result<Json<VisaCheckResponse>, ApiError> {
    let mut errors = FieldErrors::default();
    require(&mut errors, "nationality", &request.nationality, "Please select your nationality.");
    require(&mut errors, "destination", &request.destination, "Destination is required.");
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }
    Ok(Json(state.dispatcher.check_visa_requirements(&request).await?))
}

async fn nationalities() -> Json<&'static [SelectOption]> {
    Json(NATIONALITIES)
}

async fn currencies() -> Json<&'static [SelectOption]> {
    Json(CURRENCIES)
}

async fn trending() -> Json<&'static [TrendingPlace]> {
    Json(TRENDING_PLACES)
}

#[derive(Serialize)]
struct Fact {
    fact: &'static str,
}

async fn random_fact() -> Json<Fact> {
    Json(Fact {
        fact: reference::random_fact(),
    })
}
