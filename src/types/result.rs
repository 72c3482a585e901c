use super::itinerary::{DayPlan, TripRequest, TRIP_DAYS};
use crate::theme::{Theme, ThemeRole};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Completed itinerary handed back to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Request that produced this itinerary
    pub request: TripRequest,
    /// Selected day plans, day-ascending
    pub days: Vec<DayPlan>,
    /// Time spent between submission and resolution, thinking delay included
    pub duration: Duration,
}

/// Figures shown in the "Trip Summary" card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Duration as requested by the user, before clamping
    pub requested_days: i64,
    /// Number of day plans actually returned
    pub planned_days: usize,
    pub focus_area: String,
    pub budget_category: String,
}

impl TripSummary {
    /// Duration shown on the summary card: the requested length when the form
    /// could have produced it, otherwise the number of days actually planned
    pub fn display_days(&self) -> i64 {
        if TRIP_DAYS.contains(&self.requested_days) {
            self.requested_days
        } else {
            self.planned_days as i64
        }
    }
}

/// Result of driving a session through the thinking delay
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Completed(Itinerary),
    /// The session was cancelled or reset before the delay elapsed
    Suppressed,
}

impl GenerationOutcome {
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            GenerationOutcome::Completed(itinerary) => Some(itinerary),
            GenerationOutcome::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, GenerationOutcome::Suppressed)
    }
}

impl Itinerary {
    pub fn new(request: TripRequest, days: Vec<DayPlan>, duration: Duration) -> Self {
        Self {
            request,
            days,
            duration,
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn attractions(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.attraction.as_str()).collect()
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            requested_days: self.request.days,
            planned_days: self.days.len(),
            focus_area: self.request.interest.to_string(),
            budget_category: self.request.budget.to_string(),
        }
    }

    /// Render the itinerary as day cards followed by the trip summary
    pub fn render(&self, theme: &Theme) -> String {
        let mut lines = Vec::new();

        lines.push(theme.paint(ThemeRole::HeaderBackground, "=== Your Personalized Itinerary ==="));

        for plan in &self.days {
            lines.push(String::new());
            lines.push(format!(
                "{}  {}",
                theme.paint(ThemeRole::Primary, &format!("[Day {}]", plan.day)),
                theme.paint(ThemeRole::TextSecondary, &plan.weather_hint)
            ));
            lines.push(theme.paint(ThemeRole::Text, &plan.attraction));
            lines.push(theme.paint(ThemeRole::TextSecondary, &plan.description));
            lines.push(theme.paint(ThemeRole::Primary, &format!("#{}", plan.category)));
            lines.push(theme.paint(
                ThemeRole::TextSecondary,
                &format!(
                    "Time: {}   Cost: {}",
                    plan.estimated_time_range, plan.estimated_cost_range
                ),
            ));
        }

        let summary = self.summary();
        lines.push(String::new());
        lines.push(theme.paint(ThemeRole::HeaderBackground, "--- Trip Summary ---"));
        lines.push(format!("Total Duration: {} Days", summary.display_days()));
        lines.push(format!("Focus Area: {}", summary.focus_area));
        lines.push(format!("Budget Category: {}", summary.budget_category));

        lines.join("\n")
    }
}
