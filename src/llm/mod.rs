//! Model provider clients
//!
//! [`ChatClient`] is the seam between the dispatcher and the hosted model: the
//! dispatcher only ever sends a system message plus a user prompt and gets the
//! reply text back. Transport and vendor envelopes live in the implementations.

pub mod anthropic;
pub mod gemini;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{ModelProvider, TripPlannerConfig};

/// Sends chat-style prompts to a model and returns the reply text
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` message followed by a `user` prompt and return the
    /// assistant's response text.
    async fn complete(&self, system: &str, user: &str) -> crate::Result<String>;

    /// Provider name for logs
    fn provider(&self) -> &'static str;
}

/// Build the client selected by the `[model]` config section
pub fn client_from_config(config: &TripPlannerConfig) -> crate::Result<Arc<dyn ChatClient>> {
    let model = &config.model;
    let api_key = config.require_api_key()?;
    let timeout = Duration::from_secs(model.timeout_seconds.into());

    let client: Arc<dyn ChatClient> = match model.provider {
        ModelProvider::Anthropic => Arc::new(AnthropicClient::new(
            api_key,
            &model.model,
            &model.base_url,
            model.max_tokens,
            timeout,
        )?),
        ModelProvider::Gemini => Arc::new(GeminiClient::new(
            api_key,
            &model.model,
            &model.base_url,
            model.max_tokens,
            timeout,
        )?),
    };
    Ok(client)
}

/// Cut the outermost JSON object out of a model reply.
///
/// Models sometimes wrap the object in code fences or a sentence; anything
/// before the first `{` and after the last `}` is ignored.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Shorten provider error bodies before they reach logs or messages
pub(crate) fn truncate(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
