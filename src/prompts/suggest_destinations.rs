use super::{ITINERARY_TABLE_FORMAT, Prompt};
use crate::models::{SuggestDestinationsInput, SuggestionResult};

/// Asks for primary and premium destination suggestions
pub struct SuggestDestinationsPrompt;

impl Prompt for SuggestDestinationsPrompt {
    type Input = SuggestDestinationsInput;
    type Output = SuggestionResult;

    fn name(&self) -> &'static str {
        "suggest_destinations"
    }

    fn instructions(&self, input: &SuggestDestinationsInput) -> String {
        format!(
            "Suggest the best travel destinations based on the following criteria:

Travel Dates: {dates}
Nationality: {nationality}
Budget: {budget} USD (Treat this budget as USD. All monetary values in your response MUST be in USD.)
Number of Travelers: {travelers}

For the primary (non-premium) suggestions:
- Aim to provide a diverse set of 3-5 suggestions, ideally covering different continents if feasible within budget and other constraints.
- Prioritize destinations known for their unique attractions, positive traveler reviews, and overall appeal for the given criteria. Consider both popular hotspots and hidden gems.
- Do NOT filter out primary suggestions because a visa might be required for the given nationality. Instead, accurately report the visa requirements.
- Return these primary destinations sorted by average flight price (ascending).
- Set 'isPremiumOption' to false for these primary suggestions.

For each destination (both primary and premium):
1. Provide a 'country' name.
2. Provide 'averageFlightPrice' in USD (numeric, per person).
3. Provide 'estimatedExpenses', the total estimated on-ground expenses for the trip in USD (numeric: accommodation, food, activities; excluding flights). This covers the specified number of travelers and the duration implied by the travel dates.
4. Provide 'visaRequirements' as a string, clearly indicating if a visa is needed or not, and any key details (e.g. \"Visa required, apply at embassy\", \"Visa not required for tourist stays up to 30 days.\", \"e-Visa available online.\").
5. Provide 'visaStatus' as exactly one of \"not_required\", \"required\", \"e_visa\" or \"on_arrival\", consistent with 'visaRequirements'.
6. Create a recommended day-by-day 'itinerary'. {table}
7. If possible, provide a 'detailedExpenses' object with numeric estimates in USD for 'food', 'stay' (accommodation), 'sightseeing', 'shopping', and 'transport' (local). These are on-ground costs. If 'detailedExpenses' is provided, make its sum match 'estimatedExpenses'; if they cannot be perfectly aligned, prioritize the accuracy of 'estimatedExpenses'.
8. Set 'isPremiumOption' to false for primary suggestions and true for premium suggestions. This field MUST always be present.

Additionally, provide 1-2 'Premium' or 'Splurge' destination options for travelers willing to spend roughly 25-50% more than their stated budget for a significantly enhanced experience or luxury. For these premium options:
- Follow points 1-8 above (all monetary values in USD).
- Set 'isPremiumOption' to true.
- List them AFTER the primary suggestions in the 'destinations' array.

Every destination object MUST provide 'country', 'averageFlightPrice', 'estimatedExpenses', 'visaRequirements', 'visaStatus', 'itinerary' and 'isPremiumOption'. 'detailedExpenses' is optional but preferred.

If estimations are highly variable or based on limited data, or if visa information is generalized, provide a brief 'disclaimer' such as \"All prices are estimates in USD and subject to change. Visa information is AI-generated and should be verified with official sources.\"",
            dates = input.travel_dates,
            nationality = input.nationality,
            budget = input.budget,
            travelers = input.number_of_travelers,
            table = ITINERARY_TABLE_FORMAT,
        )
    }
}
