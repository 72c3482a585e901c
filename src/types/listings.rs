use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Handicraft,
    Homestay,
}

impl ListingKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Handicraft => "Handicrafts",
            ListingKind::Homestay => "Homestays",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Handicraft => f.write_str("handicraft"),
            ListingKind::Homestay => f.write_str("homestay"),
        }
    }
}

/// A handicraft or homestay offered in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display price, kept as text ("₹1,200 per night")
    pub price: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// A local tour guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub photo: String,
    /// Years of guiding experience
    pub experience_years: u32,
    pub verified: bool,
    pub specialization: String,
    pub rating: f32,
    pub languages: Vec<String>,
}

/// A district shown on the map screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
}

/// Visitor count for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouristStats {
    pub month: String,
    pub visitors: u64,
}
