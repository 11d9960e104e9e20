//! Shared test doubles and fixtures

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use smart_trip_planner::{
    AppState, ChatClient, Dispatcher, TripPlannerConfig, TripPlannerError, web,
};

/// A model client that replays canned replies in order and records prompts
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, TripPlannerError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn new(
        replies: impl IntoIterator<Item = Result<String, TripPlannerError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// `(system, user)` pairs in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn complete(&self, system: &str, user: &str) -> smart_trip_planner::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TripPlannerError::api("no scripted reply left")))
    }

    fn provider(&self) -> &'static str {
        "scripted"
    }
}

pub fn ok(text: impl Into<String>) -> Result<String, TripPlannerError> {
    Ok(text.into())
}

pub fn dispatcher(client: &Arc<ScriptedClient>) -> Dispatcher {
    Dispatcher::new(Arc::clone(client) as Arc<dyn ChatClient>)
}

pub fn app(client: &Arc<ScriptedClient>) -> Router {
    web::app(AppState::new(dispatcher(client), TripPlannerConfig::default()))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub const VALID_SEARCH: &str =
    "start_date=2025-06-01&end_date=2025-06-10&nationality=Indian&budget=3000&number_of_travelers=2";

/// Three primary destinations out of price order plus one premium option
pub const MIXED_REPLY: &str = r#"```json
{
  "destinations": [
    {
      "country": "Japan",
      "averageFlightPrice": 900,
      "estimatedExpenses": 1800,
      "visaRequirements": "e-Visa available for Indian citizens",
      "itinerary": "<table><tr><th>Day</th></tr><tr><td>Tokyo</td></tr></table>",
      "isPremiumOption": false,
      "visaStatus": "e_visa"
    },
    {
      "country": "Maldives",
      "averageFlightPrice": 450,
      "estimatedExpenses": 3900,
      "visaRequirements": "Visa on arrival",
      "itinerary": "<table><tr><td>Male</td></tr></table>",
      "isPremiumOption": true,
      "visaStatus": "on_arrival"
    },
    {
      "country": "Vietnam",
      "averageFlightPrice": 520,
      "estimatedExpenses": 1100,
      "visaRequirements": "e-Visa required",
      "itinerary": "<table><tr><td>Hanoi</td></tr></table>",
      "detailedExpenses": {"food": 300, "stay": 500, "transport": 300},
      "isPremiumOption": false
    },
    {
      "country": "Thailand",
      "averageFlightPrice": 610,
      "estimatedExpenses": 1300,
      "visaRequirements": "Visa not required for stays up to 30 days",
      "itinerary": "",
      "isPremiumOption": false
    }
  ],
  "disclaimer": "Flight prices change frequently."
}
```"#;

/// Five primary destinations for multi-country selection
pub fn five_destination_reply() -> String {
    let destinations: Vec<serde_json::Value> = [
        ("Spain", 500),
        ("Italy", 550),
        ("Greece", 450),
        ("Croatia", 480),
        ("Malta", 420),
    ]
    .iter()
    .map(|(country, flight)| {
        serde_json::json!({
            "country": country,
            "averageFlightPrice": flight,
            "estimatedExpenses": 1000,
            "visaRequirements": "Visa required",
            "itinerary": format!("<table><tr><td>{country}</td></tr></table>"),
        })
    })
    .collect();
    serde_json::json!({ "destinations": destinations }).to_string()
}
