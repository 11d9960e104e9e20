use super::Prompt;
use crate::models::{VisaCheckRequest, VisaCheckResponse};

/// Asks whether a nationality needs a visa for a destination
pub struct CheckVisaPrompt;

impl Prompt for CheckVisaPrompt {
    type Input = VisaCheckRequest;
    type Output = VisaCheckResponse;

    fn name(&self) -> &'static str {
        "check_visa_requirements"
    }

    fn instructions(&self, input: &VisaCheckRequest) -> String {
        format!(
            "Determine whether a visa is required for a traveler of the following nationality \
             to visit the following destination.\n\n\
             Nationality: {}\nDestination: {}\n\n\
             Provide details about the visa requirements, including the type of visa needed, \
             the application process, and any other relevant information. \
             If no visa is required, clearly state that.",
            input.nationality, input.destination
        )
    }
}
