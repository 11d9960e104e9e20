use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{ChatClient, truncate};
use crate::TripPlannerError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Google Generative Language `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        max_tokens: u32,
        timeout: Duration,
    ) -> crate::Result<Self> {
        let model = model.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("smart-trip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TripPlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            model,
            max_tokens,
        })
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn complete(&self, system: &str, user: &str) -> crate::Result<String> {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                max_output_tokens: self.max_tokens,
            },
        };

        let start_time = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TripPlannerError::api(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}: {}", truncate(&body, 500));
            return Err(TripPlannerError::api(format!(
                "model provider returned {status}"
            )));
        }

        let api_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TripPlannerError::api(format!("failed to parse provider response: {e}")))?;

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| TripPlannerError::api("model provider returned no candidates"))?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if reason != "STOP" {
                warn!("Gemini candidate finished with {reason}");
            }
        }

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        info!(
            "Gemini completion in {:.3}s ({} chars)",
            start_time.elapsed().as_secs_f64(),
            text.len()
        );
        debug!("Gemini raw reply: {}", truncate(&text, 2000));
        Ok(text)
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}
