//! Built-in reference data for Jharkhand.

use crate::types::{
    itinerary::{DayPlan, Interest},
    listings::{District, Guide, ListingKind, MarketplaceItem, TouristStats},
};

#[allow(clippy::too_many_arguments)]
fn day_plan(
    id: &str,
    day: u32,
    attraction: &str,
    description: &str,
    time: &str,
    cost: &str,
    weather: &str,
    category: &str,
) -> DayPlan {
    DayPlan {
        id: id.to_string(),
        day,
        attraction: attraction.to_string(),
        description: description.to_string(),
        estimated_time_range: time.to_string(),
        estimated_cost_range: cost.to_string(),
        weather_hint: weather.to_string(),
        category: category.to_string(),
    }
}

/// Sample itineraries. Only Nature and Culture are curated; the catalog
/// answers the other interests with the Nature track.
pub(crate) fn sample_itineraries() -> Vec<(Interest, Vec<DayPlan>)> {
    vec![
        (
            Interest::Nature,
            vec![
                day_plan(
                    "1",
                    1,
                    "Betla National Park",
                    "Explore the rich wildlife and dense forests of Jharkhand",
                    "6-8 hours",
                    "₹800-1200",
                    "Sunny, 26°C",
                    "Wildlife Safari",
                ),
                day_plan(
                    "2",
                    2,
                    "Hundru Falls",
                    "Magnificent waterfall cascading from 98 meters height",
                    "4-5 hours",
                    "₹500-800",
                    "Partly cloudy, 24°C",
                    "Natural Wonder",
                ),
                day_plan(
                    "3",
                    3,
                    "Dalma Wildlife Sanctuary",
                    "Home to elephants and diverse bird species",
                    "5-6 hours",
                    "₹600-1000",
                    "Clear, 25°C",
                    "Wildlife Safari",
                ),
            ],
        ),
        (
            Interest::Culture,
            vec![
                day_plan(
                    "4",
                    1,
                    "Jagannath Temple, Ranchi",
                    "Replica of Puri Jagannath Temple with stunning architecture",
                    "2-3 hours",
                    "₹200-400",
                    "Sunny, 28°C",
                    "Religious Site",
                ),
                day_plan(
                    "5",
                    2,
                    "Tribal Research Institute Museum",
                    "Learn about rich tribal heritage and culture",
                    "3-4 hours",
                    "₹300-500",
                    "Cloudy, 26°C",
                    "Cultural Museum",
                ),
                day_plan(
                    "6",
                    3,
                    "Birsa Munda Memorial",
                    "Pay homage to the tribal freedom fighter",
                    "2-3 hours",
                    "₹150-300",
                    "Partly sunny, 27°C",
                    "Historical Monument",
                ),
            ],
        ),
    ]
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    price: &str,
    kind: ListingKind,
    image: &str,
    rating: f32,
) -> MarketplaceItem {
    MarketplaceItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        kind,
        image: image.to_string(),
        rating: Some(rating),
    }
}

pub(crate) fn marketplace_items() -> Vec<MarketplaceItem> {
    vec![
        item(
            "1",
            "Handwoven Tussar Silk Saree",
            "Authentic Jharkhand tussar silk with traditional motifs",
            "₹3,500 - ₹8,000",
            ListingKind::Handicraft,
            "silk-saree",
            4.8,
        ),
        item(
            "2",
            "Tribal Art Wooden Sculptures",
            "Handcrafted wooden sculptures by local tribal artists",
            "₹800 - ₹2,500",
            ListingKind::Handicraft,
            "wooden-sculpture",
            4.6,
        ),
        item(
            "3",
            "Dhokra Metal Crafts",
            "Traditional bell metal handicrafts using ancient technique",
            "₹600 - ₹1,800",
            ListingKind::Handicraft,
            "dhokra-craft",
            4.7,
        ),
        item(
            "4",
            "Village Homestay - Netarhat",
            "Experience authentic tribal lifestyle in hill station",
            "₹1,200 per night",
            ListingKind::Homestay,
            "netarhat-homestay",
            4.5,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn guide(
    id: &str,
    name: &str,
    photo: &str,
    experience_years: u32,
    verified: bool,
    specialization: &str,
    rating: f32,
    languages: &[&str],
) -> Guide {
    Guide {
        id: id.to_string(),
        name: name.to_string(),
        photo: photo.to_string(),
        experience_years,
        verified,
        specialization: specialization.to_string(),
        rating,
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

pub(crate) fn verified_guides() -> Vec<Guide> {
    vec![
        guide(
            "1",
            "Rajesh Kumar Munda",
            "guide-rajesh",
            8,
            true,
            "Wildlife & Nature Tours",
            4.9,
            &["Hindi", "English", "Mundari"],
        ),
        guide(
            "2",
            "Sunita Devi",
            "guide-sunita",
            12,
            true,
            "Cultural & Heritage Tours",
            4.8,
            &["Hindi", "English", "Santali"],
        ),
        guide(
            "3",
            "Amit Singh",
            "guide-amit",
            6,
            false,
            "Adventure & Trekking",
            4.4,
            &["Hindi", "English"],
        ),
        guide(
            "4",
            "Priya Oraon",
            "guide-priya",
            10,
            true,
            "Spiritual & Temple Tours",
            4.7,
            &["Hindi", "English", "Kurukh"],
        ),
    ]
}

fn district(id: &str, name: &str, description: &str, image: &str, highlights: &[&str]) -> District {
    District {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

pub(crate) fn districts() -> Vec<District> {
    vec![
        district(
            "ranchi",
            "Ranchi",
            "Capital city known for waterfalls, hills, and urban attractions",
            "ranchi-district",
            &["Rock Garden", "Tagore Hill", "Kanke Dam"],
        ),
        district(
            "jamshedpur",
            "Jamshedpur",
            "Steel city with modern infrastructure and cultural sites",
            "jamshedpur-district",
            &["Tata Steel Zoological Park", "Jubilee Park", "Dalma Hills"],
        ),
        district(
            "dhanbad",
            "Dhanbad",
            "Coal capital with mining heritage and natural beauty",
            "dhanbad-district",
            &["Maithon Dam", "Topchanchi Lake", "Bhatinda Falls"],
        ),
    ]
}

pub(crate) fn tourist_stats() -> Vec<TouristStats> {
    [
        ("Jan", 45_000),
        ("Feb", 52_000),
        ("Mar", 48_000),
        ("Apr", 38_000),
        ("May", 31_000),
        ("Jun", 28_000),
        ("Jul", 35_000),
        ("Aug", 42_000),
        ("Sep", 47_000),
        ("Oct", 55_000),
        ("Nov", 62_000),
        ("Dec", 58_000),
    ]
    .into_iter()
    .map(|(month, visitors)| TouristStats {
        month: month.to_string(),
        visitors,
    })
    .collect()
}
