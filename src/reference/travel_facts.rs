use rand::RngExt;

pub const TRAVEL_FACTS: &[&str] = &[
    "The Eiffel Tower can be 15 cm taller during the summer due to thermal expansion.",
    "France is the most visited country in the world.",
    "The Great Wall of China is not visible from the moon with the naked eye.",
    "There are more than 24 time zones around the world.",
    "Russia is the largest country in the world, spanning 11 time zones.",
    "Canada has the longest coastline of any country in the world.",
    "The Vatican City is the smallest country in the world.",
    "Antarctica is the coldest, driest, and windiest continent.",
    "Over 80% of the world's population has never been on an airplane.",
    "The Dead Sea is so salty that you can float in it effortlessly.",
    "New York City was briefly the capital of the United States from 1789 to 1790.",
    "The Amazon Rainforest produces 20% of the world's oxygen.",
    "Hawaii is the only US state that grows coffee commercially.",
    "Bangkok's full ceremonial name is one of the longest place names in the world.",
    "There are more pyramids in Sudan than in Egypt.",
    "Finland has the most lakes in the world (187,888 lakes).",
    "The first city to reach a population of one million people was Rome, Italy, in 133 B.C.",
    "Japan has the world's oldest continuously operating hotel, Nishiyama Onsen Keiunkan, founded in 705 AD.",
    "About 70% of the Earth's surface is covered by water.",
    "The shortest scheduled passenger flight in the world is between Westray and Papa Westray in Scotland, lasting just 90 seconds.",
];

/// A "Did you know?" fact for the loading page
#[must_use]
pub fn random_fact() -> &'static str {
    TRAVEL_FACTS[rand::rng().random_range(0..TRAVEL_FACTS.len())]
}
