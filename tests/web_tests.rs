//! HTTP tests driving the full router with a scripted model client

mod common;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use common::{
    MIXED_REPLY, ScriptedClient, VALID_SEARCH, app, body_text, five_destination_reply, get, ok,
    post_form, post_json, send,
};
use serde_json::{Value, json};
use smart_trip_planner::TripPlannerError;

/// Submit the search form and return the session path from the redirect
async fn submit_search(app: &Router, uri: &str) -> String {
    let response = send(app, post_form(uri, VALID_SEARCH)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

/// Poll the results page until the background search has finished
async fn settled_results(app: &Router, path: &str) -> String {
    for _ in 0..100 {
        let html = body_text(send(app, get(path)).await).await;
        if !html.contains("http-equiv=\"refresh\"") {
            return html;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("search at {path} never completed");
}

#[tokio::test]
async fn test_health() {
    let app = app(&ScriptedClient::new([]));
    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_index_renders_form() {
    let app = app(&ScriptedClient::new([]));
    let html = body_text(send(&app, get("/")).await).await;
    assert!(html.contains("action=\"/search\""));
    assert!(html.contains("Select your nationality"));
    assert!(html.contains("Kyoto, Japan"));
}

#[tokio::test]
async fn test_invalid_search_shows_inline_errors() {
    let client = ScriptedClient::new([]);
    let app = app(&client);
    let body = "start_date=2025-06-10&end_date=2025-06-01&nationality=&budget=-5&number_of_travelers=0";
    let response = send(&app, post_form("/search", body)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("End date cannot be before start date."));
    assert!(html.contains("Please select your nationality."));
    assert!(html.contains("Budget must be a positive number."));
    assert!(html.contains("Must be at least 1 traveler."));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_search_renders_primary_and_premium_groups() {
    let app = app(&ScriptedClient::new([ok(MIXED_REPLY)]));
    let path = submit_search(&app, "/search").await;
    assert!(path.starts_with("/sessions/"));

    let html = settled_results(&app, &path).await;
    let primary = html.find("Top Suggestions").unwrap();
    let vietnam = html.find("<h3>Vietnam").unwrap();
    let thailand = html.find("<h3>Thailand").unwrap();
    let japan = html.find("<h3>Japan").unwrap();
    let premium = html.find("Premium Options").unwrap();
    let maldives = html.find("<h3>Maldives").unwrap();

    assert!(primary < vietnam && vietnam < thailand && thailand < japan);
    assert!(japan < premium && premium < maldives);
    assert!(html.contains("Please Note"));
    assert!(html.contains("Flight prices change frequently."));
    assert!(html.contains("Plan Multi-Country Trip"));
    assert!(html.contains("Expense breakdown"));
}

#[tokio::test]
async fn test_failed_search_shows_banner_without_stale_results() {
    let client = ScriptedClient::new([
        ok(MIXED_REPLY),
        Err(TripPlannerError::api("model provider returned 503 Service Unavailable")),
    ]);
    let app = app(&client);

    let path = submit_search(&app, "/search").await;
    let html = settled_results(&app, &path).await;
    assert!(html.contains("<h3>Vietnam"));

    let session = path.trim_start_matches("/sessions/");
    let second = submit_search(&app, &format!("/search?session={session}")).await;
    assert_eq!(second, path);

    let html = settled_results(&app, &path).await;
    assert!(html.contains("Search Error"));
    assert!(html.contains("503 Service Unavailable"));
    assert!(!html.contains("<h3>Vietnam"));
    assert!(!html.contains("Please Note"));
    assert!(!html.contains("No destinations matched"));
}

#[tokio::test]
async fn test_empty_result_message() {
    let app = app(&ScriptedClient::new([ok(r#"{"destinations": []}"#)]));
    let path = submit_search(&app, "/search").await;
    let html = settled_results(&app, &path).await;
    assert!(html.contains("No destinations matched your criteria. Please try different options."));
    assert!(!html.contains("Search Error"));
}

#[tokio::test]
async fn test_itinerary_view() {
    let app = app(&ScriptedClient::new([ok(MIXED_REPLY)]));
    let path = submit_search(&app, "/search").await;
    settled_results(&app, &path).await;

    let html = body_text(send(&app, get(&format!("{path}/itinerary/2"))).await).await;
    assert!(html.contains("Itinerary for Vietnam"));
    assert!(html.contains("<table><tr><td>Hanoi</td></tr></table>"));
    assert!(html.contains("2025-06-01 to 2025-06-10 (10 days)"));

    let html = body_text(send(&app, get(&format!("{path}/itinerary/3"))).await).await;
    assert!(html.contains("No detailed itinerary provided for this destination."));

    let response = send(&app, get(&format!("{path}/itinerary/9"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_multi_country_cap_and_total() {
    let app = app(&ScriptedClient::new([ok(five_destination_reply())]));
    let path = submit_search(&app, "/search").await;
    settled_results(&app, &path).await;

    for index in 0..5 {
        let response = send(&app, post_form(&format!("{path}/multi/toggle/{index}"), "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let html = body_text(send(&app, get(&format!("{path}/multi"))).await).await;
    assert!(html.contains("Select 4 of up to 4 countries"));
    // Spain, Italy, Greece and Croatia were taken before the cap; Malta was not
    assert!(html.contains("$5,980"));
    assert!(html.contains("View Itineraries for Selected (4)"));

    let html = body_text(send(&app, get(&format!("{path}/multi/itineraries"))).await).await;
    assert!(html.contains("<td>Croatia</td>"));
    assert!(!html.contains("<td>Malta</td>"));
}

#[tokio::test]
async fn test_combined_itineraries_need_two_selections() {
    let app = app(&ScriptedClient::new([ok(five_destination_reply())]));
    let path = submit_search(&app, "/search").await;
    settled_results(&app, &path).await;

    send(&app, post_form(&format!("{path}/multi/toggle/0"), "")).await;
    let response = send(&app, get(&format!("{path}/multi/itineraries"))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_multi_country_needs_two_primary_suggestions() {
    let reply = json!({
        "destinations": [
            {
                "country": "Portugal",
                "averageFlightPrice": 600,
                "estimatedExpenses": 1200,
                "visaRequirements": "Schengen visa required",
                "itinerary": "<table><tr><td>Lisbon</td></tr></table>",
            },
            {
                "country": "Seychelles",
                "averageFlightPrice": 900,
                "estimatedExpenses": 3500,
                "visaRequirements": "Visa not required",
                "itinerary": "<table><tr><td>Mahe</td></tr></table>",
                "isPremiumOption": true,
            }
        ]
    });
    let app = app(&ScriptedClient::new([ok(reply.to_string())]));
    let path = submit_search(&app, "/search").await;
    let html = settled_results(&app, &path).await;
    assert!(!html.contains("Plan Multi-Country Trip"));

    for response in [
        send(&app, get(&format!("{path}/multi"))).await,
        send(&app, post_form(&format!("{path}/multi/toggle/0"), "")).await,
        send(&app, get(&format!("{path}/multi/itineraries"))).await,
    ] {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), path.as_str());
    }
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = app(&ScriptedClient::new([]));
    let response = send(
        &app,
        get("/sessions/00000000-0000-4000-8000-000000000000"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_suggestions() {
    let app = app(&ScriptedClient::new([ok(MIXED_REPLY)]));
    let request = json!({
        "startDate": "2025-06-01",
        "endDate": "2025-06-10",
        "nationality": "Indian",
        "budget": 3000,
        "numberOfTravelers": 2
    });
    let response = send(&app, post_json("/api/suggestions", &request)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["destinations"].as_array().unwrap().len(), 4);
    assert_eq!(body["destinations"][1]["isPremiumOption"], true);
}

#[tokio::test]
async fn test_api_suggestions_field_errors() {
    let client = ScriptedClient::new([]);
    let app = app(&client);
    let request = json!({ "startDate": "2025-06-01", "budget": 0 });
    let response = send(&app, post_json("/api/suggestions", &request)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["errors"]["end_date"], "End date is required.");
    assert_eq!(body["errors"]["budget"], "Budget must be a positive number.");
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_api_request_failure_is_bad_gateway() {
    let app = app(&ScriptedClient::new([ok("not json at all")]));
    let request = json!({
        "startDate": "2025-06-01",
        "endDate": "2025-06-10",
        "nationality": "Indian",
        "budget": "3000",
        "numberOfTravelers": "2"
    });
    let response = send(&app, post_json("/api/suggestions", &request)).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("unexpected data"));
}

#[tokio::test]
async fn test_api_visa_and_itinerary() {
    let app = app(&ScriptedClient::new([
        ok(r#"{"visaRequired": true, "visaDetails": "Apply at the embassy."}"#),
        ok(r#"{"itinerary": "<table><tr><td>Day 1</td></tr></table>"}"#),
    ]));

    let response = send(
        &app,
        post_json("/api/visa", &json!({"nationality": "Indian", "destination": "Japan"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["visaRequired"], true);

    let response = send(
        &app,
        post_json(
            "/api/itinerary",
            &json!({"destination": "Japan", "travelDates": "2025-06-01 to 2025-06-03"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        post_json("/api/visa", &json!({"nationality": "", "destination": "Japan"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_api_reference_data() {
    let app = app(&ScriptedClient::new([]));

    let body: Value =
        serde_json::from_str(&body_text(send(&app, get("/api/currencies")).await).await).unwrap();
    assert_eq!(body[0]["value"], "USD");

    let body: Value =
        serde_json::from_str(&body_text(send(&app, get("/api/nationalities")).await).await)
            .unwrap();
    assert!(body.as_array().unwrap().iter().any(|n| n["value"] == "Indian"));

    let body: Value =
        serde_json::from_str(&body_text(send(&app, get("/api/trending")).await).await).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 6);

    let body: Value =
        serde_json::from_str(&body_text(send(&app, get("/api/facts/random")).await).await)
            .unwrap();
    assert!(!body["fact"].as_str().unwrap().is_empty());
}
