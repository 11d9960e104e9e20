use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{ChatClient, truncate};
use crate::TripPlannerError;

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Anthropic Messages API (and compatible servers)
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    /// Full endpoint URL (base + MESSAGES_PATH)
    url: String,
}

impl AnthropicClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        max_tokens: u32,
        timeout: Duration,
    ) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("smart-trip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            url: format!("{}{MESSAGES_PATH}", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn complete(&self, system: &str, user: &str) -> crate::Result<String> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![ApiMessage {
                role: "user",
                content: user,
            }],
        };

        let start_time = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| TripPlannerError::api(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Anthropic API returned {status}: {}", truncate(&body, 500));
            return Err(TripPlannerError::api(format!(
                "model provider returned {status}"
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| TripPlannerError::api(format!("failed to parse provider response: {e}")))?;

        if api_response.stop_reason.as_deref() == Some("max_tokens") {
            warn!("Anthropic reply was cut off at max_tokens={}", self.max_tokens);
        }

        let text: String = api_response
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect();

        info!(
            "Anthropic completion in {:.3}s ({} chars)",
            start_time.elapsed().as_secs_f64(),
            text.len()
        );
        debug!("Anthropic raw reply: {}", truncate(&text, 2000));
        Ok(text)
    }

    fn provider(&self) -> &'static str {
        "anthropic"
    }
}
