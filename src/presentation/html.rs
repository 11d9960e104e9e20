//! Server-rendered HTML pages
//!
//! Pure functions from state to markup. Model text is escaped everywhere except
//! itinerary tables, which are inserted as provided.

use uuid::Uuid;

use crate::form::{
    FIELD_BUDGET, FIELD_END_DATE, FIELD_NATIONALITY, FIELD_START_DATE, FIELD_TRAVELERS,
    FieldErrors, SearchForm,
};
use crate::models::{Destination, VisaClass};
use crate::reference::{NATIONALITIES, TRENDING_PLACES};

use super::itinerary::{EMPTY_ITINERARY, ItineraryView};
use super::links::{flight_search_url, map_url};
use super::listing::ListedDestination;
use super::page_state::PageState;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:960px;margin:0 auto;padding:1rem;color:#1f2933}\
header a{text-decoration:none;color:inherit}\
.card{border:1px solid #d9e2ec;border-radius:8px;padding:1rem;margin:1rem 0}\
.premium{border-color:#d4a017}\
.badge{background:#d4a017;color:#fff;border-radius:4px;padding:0 .4rem;font-size:.8rem}\
.visa-free{color:#2e7d32}.visa-required{color:#c62828}\
.alert{border-radius:8px;padding:.75rem 1rem;margin:1rem 0}\
.alert.error{background:#fde8e8;border:1px solid #e12d39}\
.alert.note{background:#fff8e1;border:1px solid #d4a017}\
.field-error{color:#e12d39;margin:.25rem 0}\
.muted{color:#627d98}\
table{border-collapse:collapse}td,th{border:1px solid #d9e2ec;padding:.3rem .5rem;vertical-align:top}";

/// Escape text for use in element content and quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whole-dollar amount with thousands separators, e.g. `$12,345`
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | Smart Trip Planner</title>\n{head_extra}<style>{STYLE}</style>\n</head>\n\
         <body>\n<header><h1><a href=\"/\">Smart Trip Planner</a></h1></header>\n\
         <main>\n{body}</main>\n</body>\n</html>\n",
        escape(title)
    )
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| format!("<p class=\"field-error\">{}</p>", escape(message)))
        .unwrap_or_default()
}

/// Search form with inline errors and the trending section
#[must_use]
pub fn render_search_page(form: &SearchForm, errors: &FieldErrors, session: Option<Uuid>) -> String {
    let action = match session {
        Some(id) => format!("/search?session={id}"),
        None => "/search".to_string(),
    };
    let mut body = String::new();
    body.push_str("<section>\n<h2>Plan your next trip</h2>\n");
    body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));

    body.push_str(&format!(
        "<p><label>Start date <input type=\"date\" name=\"start_date\" value=\"{}\"></label></p>{}\n",
        escape(&form.start_date),
        field_error(errors, FIELD_START_DATE)
    ));
    body.push_str(&format!(
        "<p><label>End date <input type=\"date\" name=\"end_date\" value=\"{}\"></label></p>{}\n",
        escape(&form.end_date),
        field_error(errors, FIELD_END_DATE)
    ));

    body.push_str("<p><label>Nationality <select name=\"nationality\">\n");
    body.push_str("<option value=\"\">Select your nationality</option>\n");
    for option in NATIONALITIES {
        let selected = if option.value == form.nationality.trim() {
            " selected"
        } else {
            ""
        };
        body.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            escape(option.value),
            escape(option.label)
        ));
    }
    body.push_str("</select></label></p>");
    body.push_str(&field_error(errors, FIELD_NATIONALITY));
    body.push('\n');

    body.push_str(&format!(
        "<p><label>Budget (USD) <input type=\"number\" name=\"budget\" min=\"1\" step=\"any\" value=\"{}\"></label></p>{}\n",
        escape(&form.budget),
        field_error(errors, FIELD_BUDGET)
    ));
    body.push_str(&format!(
        "<p><label>Travelers <input type=\"number\" name=\"number_of_travelers\" min=\"1\" step=\"1\" value=\"{}\"></label></p>{}\n",
        escape(&form.number_of_travelers),
        field_error(errors, FIELD_TRAVELERS)
    ));
    body.push_str("<p><button type=\"submit\">Find Destinations</button></p>\n</form>\n</section>\n");

    body.push_str("<section>\n<h2>Trending This Month</h2>\n");
    for place in TRENDING_PLACES {
        body.push_str(&format!(
            "<details class=\"card\"><summary><strong>{}</strong> <span class=\"muted\">{}</span></summary>\n\
             <p>Typical trip cost: {} &middot; Minimum stay: {}</p>\n<h4>Suggested Places to Visit</h4>\n<ul>\n",
            escape(place.name),
            escape(place.description),
            escape(place.trip_cost),
            escape(place.min_days)
        ));
        for sight in place.places_to_visit {
            body.push_str(&format!("<li>{}</li>\n", escape(sight)));
        }
        body.push_str("</ul>\n</details>\n");
    }
    body.push_str("</section>\n");

    layout("Search", "", &body)
}

fn render_destination_card(session: Uuid, entry: &ListedDestination<'_>, state: &PageState) -> String {
    let destination = entry.destination;
    let dates = state.travel_dates();
    let mut card = String::new();

    let class = if destination.is_premium() { "card premium" } else { "card" };
    card.push_str(&format!("<article class=\"{class}\">\n<h3>{}", escape(&destination.country)));
    if destination.is_premium() {
        card.push_str(" <span class=\"badge\">Premium</span>");
    }
    card.push_str("</h3>\n");

    card.push_str(&format!(
        "<p>Average flight price: {} &middot; Estimated expenses: {} &middot; Trip total: {}</p>\n",
        format_usd(destination.average_flight_price),
        format_usd(destination.estimated_expenses),
        format_usd(destination.trip_cost())
    ));

    let visa = destination.visa_class();
    let badge = match visa {
        VisaClass::NotRequired => "visa-free",
        VisaClass::Required => "visa-required",
    };
    // e-Visa and visa on arrival are narrower than the class label
    let detail = destination
        .visa_status
        .filter(|status| status.label() != visa.label())
        .map(|status| format!(" ({})", escape(status.label())))
        .unwrap_or_default();
    card.push_str(&format!(
        "<p>Visa: <strong class=\"{badge}\">{}</strong>{detail} {}</p>\n",
        visa.label(),
        escape(&destination.visa_requirements)
    ));

    card.push_str(&render_expenses(destination));

    card.push_str(&format!(
        "<p><a href=\"/sessions/{session}/itinerary/{}\">View Itinerary</a> &middot; \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Book Flights</a> &middot; \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"View {} on Google Maps\">View on Map</a></p>\n",
        entry.index,
        escape(&flight_search_url(&destination.country, dates.as_ref(), state.travelers())),
        escape(&map_url(&destination.country)),
        escape(&destination.country)
    ));
    card.push_str("</article>\n");
    card
}

fn render_expenses(destination: &Destination) -> String {
    let Some(details) = &destination.detailed_expenses else {
        return String::new();
    };
    let items = details.items();
    if items.is_empty() {
        return String::new();
    }
    let mut html = String::from("<details><summary>Expense breakdown</summary>\n<table>\n");
    for (label, amount) in items {
        html.push_str(&format!(
            "<tr><td>{label}</td><td>{}</td></tr>\n",
            format_usd(amount)
        ));
    }
    html.push_str(&format!(
        "<tr><th>Total</th><th>{}</th></tr>\n</table>\n</details>\n",
        format_usd(details.total())
    ));
    html
}

/// Results page: loading, error, disclaimer, both listings or the empty message
#[must_use]
pub fn render_results_page(session: Uuid, state: &PageState, refresh_seconds: u32) -> String {
    let mut body = String::new();
    let head = if state.loading {
        format!("<meta http-equiv=\"refresh\" content=\"{refresh_seconds}\">\n")
    } else {
        String::new()
    };

    if let Some(criteria) = &state.criteria {
        body.push_str(&format!(
            "<p class=\"muted\">{} &middot; {} traveler(s) &middot; budget {} &middot; {}</p>\n",
            escape(&criteria.travel_dates.to_string()),
            criteria.number_of_travelers,
            format_usd(criteria.budget),
            escape(&criteria.nationality)
        ));
    }

    if state.loading {
        body.push_str("<section class=\"loading\">\n<h2>Finding destinations for you&hellip;</h2>\n");
        if let Some(fact) = state.fact {
            body.push_str(&format!(
                "<p><strong>Did you know?</strong> {}</p>\n",
                escape(fact)
            ));
        }
        body.push_str("</section>\n");
    }

    if let Some(error) = &state.error {
        body.push_str(&format!(
            "<div class=\"alert error\" role=\"alert\"><h2>Search Error</h2><p>{}</p></div>\n",
            escape(error)
        ));
    }

    if let Some(disclaimer) = &state.disclaimer {
        body.push_str(&format!(
            "<div class=\"alert note\"><h2>Please Note</h2><p>{}</p></div>\n",
            escape(disclaimer)
        ));
    }

    let listing = state.listing();
    if !listing.primary.is_empty() {
        body.push_str("<section id=\"primary\">\n<h2>Top Suggestions</h2>\n");
        if listing.offers_multi_country() {
            body.push_str(&format!(
                "<p><a href=\"/sessions/{session}/multi\">Plan Multi-Country Trip</a></p>\n"
            ));
        }
        for entry in &listing.primary {
            body.push_str(&render_destination_card(session, entry, state));
        }
        body.push_str("</section>\n");
    }
    if !listing.premium.is_empty() {
        body.push_str("<section id=\"premium\">\n<h2>Premium Options</h2>\n");
        for entry in &listing.premium {
            body.push_str(&render_destination_card(session, entry, state));
        }
        body.push_str("</section>\n");
    }

    if let Some(message) = state.empty_message() {
        body.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(message)));
    }

    body.push_str(&format!("<p><a href=\"/?session={session}\">New search</a></p>\n"));
    layout("Results", &head, &body)
}

fn itinerary_body(view: &ItineraryView<'_>, fallback: &str) -> String {
    match view.markup() {
        Some(markup) => format!("<div class=\"itinerary\">\n{markup}\n</div>\n"),
        None => format!("<p class=\"muted\">{}</p>\n", escape(fallback)),
    }
}

#[must_use]
pub fn render_itinerary_page(session: Uuid, view: &ItineraryView<'_>) -> String {
    let mut body = format!("<h2>Itinerary for {}</h2>\n", escape(view.country));
    if let Some(line) = view.dates_line() {
        body.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(&line)));
    }
    body.push_str(&itinerary_body(view, EMPTY_ITINERARY));
    body.push_str(&format!(
        "<p><a href=\"/sessions/{session}\">Back to results</a></p>\n"
    ));
    layout(&format!("Itinerary for {}", view.country), "", &body)
}

/// Candidate list with toggle buttons, running total and the view action
#[must_use]
pub fn render_multi_page(session: Uuid, state: &PageState) -> String {
    let selection = &state.multi;
    let mut body = String::from("<h2>Plan Multi-Country Trip</h2>\n");
    body.push_str(&format!(
        "<p>Select {} {} countries from your suggestions to combine.</p>\n",
        if selection.is_empty() {
            "up to".to_string()
        } else {
            format!("{} of up to", selection.len())
        },
        selection.cap()
    ));
    if selection.is_full() {
        body.push_str(&format!(
            "<p class=\"muted\">You can select a maximum of {} countries.</p>\n",
            selection.cap()
        ));
    }

    body.push_str("<ul>\n");
    for entry in super::listing::sorted_by_flight_price(&state.destinations) {
        let destination = entry.destination;
        let selected = selection.is_selected(&destination.country);
        let action = if selected { "Remove" } else { "Add" };
        let disabled = if !selected && selection.is_full() { " disabled" } else { "" };
        body.push_str(&format!(
            "<li><form method=\"post\" action=\"/sessions/{session}/multi/toggle/{}\" style=\"display:inline\">\
             <button type=\"submit\"{disabled}>{action}</button></form> {}{} &middot; {}</li>\n",
            entry.index,
            escape(&destination.country),
            if selected { " &#10003;" } else { "" },
            format_usd(destination.trip_cost())
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><strong>Estimated total for selection:</strong> {}</p>\n",
        format_usd(selection.total_cost(&state.destinations))
    ));
    if selection.can_view_itineraries() {
        body.push_str(&format!(
            "<p><a href=\"/sessions/{session}/multi/itineraries\">View Itineraries for Selected ({})</a></p>\n",
            selection.len()
        ));
    } else {
        body.push_str("<p class=\"muted\">Select at least 2 countries to view combined itineraries.</p>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"/sessions/{session}\">Back to results</a></p>\n"
    ));
    layout("Multi-Country Trip", "", &body)
}

#[must_use]
pub fn render_multi_itineraries_page(session: Uuid, state: &PageState) -> String {
    let selected = state.multi.selected(&state.destinations);
    let mut body = format!(
        "<h2>Combined Itineraries</h2>\n<p>Review the itineraries for your {} selected countries.</p>\n",
        selected.len()
    );
    for entry in &selected {
        let view = ItineraryView::new(entry.destination, state.travel_dates());
        body.push_str(&format!(
            "<section class=\"card\">\n<h3>{}</h3>\n<p class=\"muted\">Trip total: {}</p>\n",
            escape(view.country),
            format_usd(entry.destination.trip_cost())
        ));
        body.push_str(&itinerary_body(&view, "No detailed itinerary provided."));
        body.push_str("</section>\n");
    }
    body.push_str(&format!(
        "<p><strong>Estimated total:</strong> {}</p>\n<p><a href=\"/sessions/{session}/multi\">Back to selection</a></p>\n",
        format_usd(state.multi.total_cost(&state.destinations))
    ));
    layout("Combined Itineraries", "", &body)
}

#[must_use]
pub fn render_not_found(message: &str) -> String {
    let body = format!(
        "<h2>Not found</h2>\n<p>{}</p>\n<p><a href=\"/\">Start a new search</a></p>\n",
        escape(message)
    );
    layout("Not found", "", &body)
}
