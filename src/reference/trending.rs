use serde::Serialize;

/// A curated destination featured on the search page
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingPlace {
    pub name: &'static str,
    pub description: &'static str,
    /// Indicative trip cost per person
    pub trip_cost: &'static str,
    pub min_days: &'static str,
    pub places_to_visit: &'static [&'static str],
}

pub const TRENDING_PLACES: &[TrendingPlace] = &[
    TrendingPlace {
        name: "Kyoto, Japan",
        description: "Ancient temples, serene gardens, and vibrant culture.",
        trip_cost: "$1,800 - $2,500",
        min_days: "5 days",
        places_to_visit: &[
            "Fushimi Inari Shrine",
            "Kinkaku-ji (Golden Pavilion)",
            "Arashiyama Bamboo Grove",
            "Gion District",
        ],
    },
    TrendingPlace {
        name: "Paris, France",
        description: "The city of lights, iconic landmarks, and art.",
        trip_cost: "$1,500 - $2,200",
        min_days: "4 days",
        places_to_visit: &["Eiffel Tower", "Louvre Museum", "Montmartre", "Musée d'Orsay"],
    },
    TrendingPlace {
        name: "Rome, Italy",
        description: "Historic ruins, Vatican City, and delicious cuisine.",
        trip_cost: "$1,400 - $2,000",
        min_days: "4 days",
        places_to_visit: &["Colosseum", "Vatican Museums", "Trevi Fountain", "Pantheon"],
    },
    TrendingPlace {
        name: "Bali, Indonesia",
        description: "Lush rice paddies, spiritual retreats, and stunning beaches.",
        trip_cost: "$900 - $1,500",
        min_days: "7 days",
        places_to_visit: &[
            "Ubud Monkey Forest",
            "Tegallalang Rice Terraces",
            "Uluwatu Temple",
            "Seminyak Beach",
        ],
    },
    TrendingPlace {
        name: "New York, USA",
        description: "Iconic skyline, Broadway shows, and diverse neighborhoods.",
        trip_cost: "$2,000 - $3,000",
        min_days: "4 days",
        places_to_visit: &["Central Park", "Statue of Liberty", "Times Square", "The Met"],
    },
    TrendingPlace {
        name: "Santorini, Greece",
        description: "Whitewashed villages, blue-domed churches, and sunsets.",
        trip_cost: "$1,600 - $2,400",
        min_days: "3 days",
        places_to_visit: &["Oia", "Fira", "Red Beach", "Akrotiri Archaeological Site"],
    },
];
