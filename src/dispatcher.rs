//! Request dispatch to the model provider
//!
//! Every operation is one prompt rendered from a typed input, one call through
//! the [`ChatClient`], and one parse-and-validate step on the reply.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::TripPlannerError;
use crate::llm::{ChatClient, extract_json_object};
use crate::models::{
    ItineraryRequest, ItineraryResponse, SearchCriteria, SuggestionResult, Validate,
    VisaCheckRequest, VisaCheckResponse,
};
use crate::prompts::{
    CheckVisaPrompt, GenerateItineraryPrompt, Prompt, SuggestDestinationsPrompt,
};

/// Sends prompts to the configured model and returns typed, validated replies
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn ChatClient>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Destination suggestions for a validated search
    #[instrument(skip(self, criteria), fields(nationality = %criteria.nationality, budget = criteria.budget))]
    pub async fn suggest_destinations(
        &self,
        criteria: &SearchCriteria,
    ) -> crate::Result<SuggestionResult> {
        let result = self
            .run(&SuggestDestinationsPrompt, &criteria.to_request())
            .await?;
        info!(
            "Received {} destination suggestions",
            result.destinations.len()
        );
        Ok(result)
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    pub async fn generate_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> crate::Result<ItineraryResponse> {
        self.run(&GenerateItineraryPrompt, request).await
    }

    #[instrument(skip(self, request), fields(destination = %request.destination))]
    pub async fn check_visa_requirements(
        &self,
        request: &VisaCheckRequest,
    ) -> crate::Result<VisaCheckResponse> {
        self.run(&CheckVisaPrompt, request).await
    }

    async fn run<P: Prompt>(&self, prompt: &P, input: &P::Input) -> crate::Result<P::Output> {
        let user = prompt.render(input);
        debug!(
            "Dispatching prompt '{}' to {} ({} chars)",
            prompt.name(),
            self.client.provider(),
            user.len()
        );

        let reply = self.client.complete(prompt.system(), &user).await?;
        parse_reply::<P::Output>(&reply).inspect_err(|e| {
            warn!("Prompt '{}' returned unusable output: {e}", prompt.name());
        })
    }
}

/// Reduce a reply to its JSON object, deserialize and shape-check it
fn parse_reply<T>(reply: &str) -> crate::Result<T>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let json = extract_json_object(reply)
        .ok_or_else(|| TripPlannerError::schema("reply did not contain a JSON object"))?;
    let output: T = serde_json::from_str(json)?;
    output.validate()?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_accepts_fenced_json() {
        let reply = "```json\n{\"destinations\": [], \"disclaimer\": \"Prices vary.\"}\n```";
        let result: SuggestionResult = parse_reply(reply).unwrap();
        assert!(result.destinations.is_empty());
        assert_eq!(result.disclaimer.as_deref(), Some("Prices vary."));
    }

    #[test]
    fn test_parse_reply_rejects_prose() {
        let err = parse_reply::<SuggestionResult>("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, TripPlannerError::Schema { .. }));
    }

    #[test]
    fn test_parse_reply_rejects_wrong_shape() {
        let err = parse_reply::<ItineraryResponse>(r#"{"plan": "Day 1"}"#).unwrap_err();
        assert!(matches!(err, TripPlannerError::Schema { .. }));
    }

    #[test]
    fn test_parse_reply_runs_validation() {
        let err = parse_reply::<ItineraryResponse>(r#"{"itinerary": "   "}"#).unwrap_err();
        assert!(err.to_string().contains("itinerary"));
    }
}
