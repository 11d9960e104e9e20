//! Server-rendered HTML routes
//!
//! A successful search creates (or reuses) a page session, starts the model
//! call in the background and redirects to the session's results page, which
//! refreshes itself until the call completes.

pub mod session;

pub use session::SessionStore;

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::form::{FieldErrors, SearchForm};
use crate::models::SearchCriteria;
use crate::presentation::{ItineraryView, PageState, SelectionChange, html};
use crate::web::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session: Option<Uuid>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/search", post(search))
        .route("/sessions/{id}", get(results))
        .route("/sessions/{id}/itinerary/{index}", get(itinerary))
        .route("/sessions/{id}/multi", get(multi))
        .route("/sessions/{id}/multi/toggle/{index}", post(toggle))
        .route("/sessions/{id}/multi/itineraries", get(multi_itineraries))
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(html::render_not_found(message))).into_response()
}

fn session_not_found() -> Response {
    not_found("This search session has expired. Please search again.")
}

async fn index(Query(query): Query<SessionQuery>) -> Html<String> {
    Html(html::render_search_page(
        &SearchForm::default(),
        &FieldErrors::default(),
        query.session,
    ))
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    Form(form): Form<SearchForm>,
) -> Response {
    let criteria = match form.validate() {
        Ok(criteria) => criteria,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(html::render_search_page(&form, &errors, query.session)),
            )
                .into_response();
        }
    };

    let id = match query.session {
        Some(id) if state.sessions.contains(id).await => id,
        _ => state.sessions.create().await,
    };
    let Some(generation) = state
        .sessions
        .update(id, |page| page.begin_search(criteria.clone()))
        .await
    else {
        return session_not_found();
    };

    spawn_search(state, id, generation, criteria);
    Redirect::to(&format!("/sessions/{id}")).into_response()
}

/// Run the model call off the request and store its outcome in the session
fn spawn_search(state: AppState, id: Uuid, generation: u64, criteria: SearchCriteria) {
    let span = info_span!("search", session = %id, generation);
    tokio::spawn(
        async move {
            let outcome = state.dispatcher.suggest_destinations(&criteria).await;
            let applied = state
                .sessions
                .update(id, |page| match outcome {
                    Ok(result) => page.apply_result(generation, result),
                    Err(e) => {
                        warn!("Search failed: {e}");
                        page.apply_error(generation, &e)
                    }
                })
                .await;
            match applied {
                Some(true) => info!("Search completed"),
                Some(false) => info!("Discarded result of superseded search"),
                None => info!("Session evicted before search completed"),
            }
        }
        .instrument(span),
    );
}

async fn results(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.sessions.get(id).await {
        Some(page) => Html(html::render_results_page(
            id,
            &page,
            state.config.planner.loading_refresh_seconds,
        ))
        .into_response(),
        None => session_not_found(),
    }
}

async fn itinerary(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Response {
    let Some(page) = state.sessions.get(id).await else {
        return session_not_found();
    };
    match page.destination(index) {
        Some(destination) => {
            let view = ItineraryView::new(destination, page.travel_dates());
            Html(html::render_itinerary_page(id, &view)).into_response()
        }
        None => not_found("That destination is not part of this search."),
    }
}

/// The multi-country flow is only offered with more than one primary suggestion
fn multi_unavailable(id: Uuid, page: &PageState) -> Option<Response> {
    if page.listing().offers_multi_country() {
        None
    } else {
        Some(Redirect::to(&format!("/sessions/{id}")).into_response())
    }
}

async fn multi(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let Some(page) = state.sessions.get(id).await else {
        return session_not_found();
    };
    if let Some(redirect) = multi_unavailable(id, &page) {
        return redirect;
    }
    Html(html::render_multi_page(id, &page)).into_response()
}

enum Toggle {
    Unavailable,
    UnknownDestination,
    Changed(SelectionChange),
}

async fn toggle(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Response {
    let outcome = state
        .sessions
        .update(id, |page| {
            if !page.listing().offers_multi_country() {
                return Toggle::Unavailable;
            }
            match page.destination(index).map(|d| d.country.clone()) {
                Some(country) => Toggle::Changed(page.multi.toggle(&country)),
                None => Toggle::UnknownDestination,
            }
        })
        .await;

    match outcome {
        None => session_not_found(),
        Some(Toggle::Unavailable) => Redirect::to(&format!("/sessions/{id}")).into_response(),
        Some(Toggle::UnknownDestination) => {
            not_found("That destination is not part of this search.")
        }
        Some(Toggle::Changed(SelectionChange::CapReached)) => {
            info!("Multi-country selection for {id} is full");
            Redirect::to(&format!("/sessions/{id}/multi")).into_response()
        }
        Some(Toggle::Changed(_)) => Redirect::to(&format!("/sessions/{id}/multi")).into_response(),
    }
}

async fn multi_itineraries(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let Some(page) = state.sessions.get(id).await else {
        return session_not_found();
    };
    if let Some(redirect) = multi_unavailable(id, &page) {
        return redirect;
    }
    if !page.multi.can_view_itineraries() {
        return Redirect::to(&format!("/sessions/{id}/multi")).into_response();
    }
    Html(html::render_multi_itineraries_page(id, &page)).into_response()
}
