use super::{ITINERARY_TABLE_FORMAT, Prompt};
use crate::models::{ItineraryRequest, ItineraryResponse};

/// Asks for a day-by-day itinerary for one destination
pub struct GenerateItineraryPrompt;

impl Prompt for GenerateItineraryPrompt {
    type Input = ItineraryRequest;
    type Output = ItineraryResponse;

    fn name(&self) -> &'static str {
        "generate_itinerary"
    }

    fn instructions(&self, input: &ItineraryRequest) -> String {
        let mut text = format!(
            "Given the destination and travel dates, create a detailed day-by-day itinerary.\n\n\
             Destination: {}\nTravel Dates: {}\n",
            input.destination, input.travel_dates
        );
        if let Some(interests) = input.interests() {
            text.push_str(&format!(
                "\nInterests: {interests}\nConsider these interests when creating the itinerary.\n"
            ));
        }
        text.push('\n');
        text.push_str(ITINERARY_TABLE_FORMAT);
        text
    }
}
