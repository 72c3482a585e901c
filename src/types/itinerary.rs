use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

use crate::error::PlannerError;

/// One recommended activity for a single day of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// Opaque identifier, unique across the catalog
    pub id: String,
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Name of the attraction visited that day
    pub attraction: String,
    pub description: String,
    /// Human readable duration, e.g. "6-8 hours"
    pub estimated_time_range: String,
    /// Human readable cost band, e.g. "₹800-1200"
    pub estimated_cost_range: String,
    /// Static weather hint for display, never live data
    pub weather_hint: String,
    /// Free-form category tag such as "Wildlife Safari"
    pub category: String,
}

/// Interest category selecting a candidate itinerary track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Interest {
    Nature,
    Culture,
    Adventure,
    Spiritual,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Nature,
        Interest::Culture,
        Interest::Adventure,
        Interest::Spiritual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Nature => "Nature",
            Interest::Culture => "Culture",
            Interest::Adventure => "Adventure",
            Interest::Spiritual => "Spiritual",
        }
    }

    /// Label shown in the planner form
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Nature => "Nature & Wildlife",
            Interest::Culture => "Culture & Heritage",
            Interest::Adventure => "Adventure Sports",
            Interest::Spiritual => "Spiritual Journey",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PlannerError::Validation(format!(
                    "unknown interest `{}` (expected one of Nature, Culture, Adventure, Spiritual)",
                    s
                ))
            })
    }
}

/// Budget band. Carried through to the trip summary; never filters results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Low => "Budget (₹500-1000/day)",
            Budget::Medium => "Moderate (₹1000-2500/day)",
            Budget::High => "Premium (₹2500+/day)",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Budget {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Budget::ALL
            .into_iter()
            .find(|budget| budget.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PlannerError::Validation(format!(
                    "unknown budget `{}` (expected one of Low, Medium, High)",
                    s
                ))
            })
    }
}

/// Trip lengths the planner form offers
pub const TRIP_DAYS: RangeInclusive<i64> = 1..=5;

/// Caller input for one planning interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Requested trip length in days. 1-5 by contract; anything else is clamped.
    pub days: i64,
    /// Primary interest driving the itinerary track
    pub interest: Interest,
    /// Budget band, display-only
    pub budget: Budget,
}

impl TripRequest {
    pub fn new(days: i64, interest: Interest, budget: Budget) -> Self {
        Self {
            days,
            interest,
            budget,
        }
    }
}

impl Default for TripRequest {
    fn default() -> Self {
        Self::new(3, Interest::Nature, Budget::Medium)
    }
}
