use crate::types::listings::TouristStats;
use serde::Serialize;

/// Headline figures on the analytics dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorSummary {
    pub total: u64,
    /// Mean monthly visitors, rounded half away from zero
    pub average: u64,
    pub peak_month: Option<String>,
    pub peak_visitors: u64,
}

impl VisitorSummary {
    pub fn from_stats(stats: &[TouristStats]) -> Self {
        let total: u64 = stats.iter().map(|s| s.visitors).sum();
        let average = if stats.is_empty() {
            0
        } else {
            (total as f64 / stats.len() as f64).round() as u64
        };

        // first month wins a tie
        let peak = stats
            .iter()
            .fold(None::<&TouristStats>, |best, s| match best {
                Some(b) if b.visitors >= s.visitors => Some(b),
                _ => Some(s),
            });

        Self {
            total,
            average,
            peak_month: peak.map(|s| s.month.clone()),
            peak_visitors: peak.map_or(0, |s| s.visitors),
        }
    }
}

/// Bar heights scaled so the busiest month reaches `max_height`
pub fn bar_heights(stats: &[TouristStats], max_height: f64) -> Vec<(String, f64)> {
    let peak = stats.iter().map(|s| s.visitors).max().unwrap_or(0);
    stats
        .iter()
        .map(|s| {
            let height = if peak == 0 {
                0.0
            } else {
                s.visitors as f64 / peak as f64 * max_height
            };
            (s.month.clone(), height)
        })
        .collect()
}

/// Months listed on the "Top Performing Months" panel
pub const TOP_MONTHS: usize = 5;

/// The `n` busiest months with their 1-based rank, busiest first.
///
/// Months with equal visitors keep their calendar order.
pub fn top_months(stats: &[TouristStats], n: usize) -> Vec<(usize, &TouristStats)> {
    let mut ranked: Vec<&TouristStats> = stats.iter().collect();
    ranked.sort_by(|a, b| b.visitors.cmp(&a.visitors));
    ranked
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, stat)| (idx + 1, stat))
        .collect()
}

/// "62K" style label under each bar
pub fn thousands_label(visitors: u64) -> String {
    format!("{}K", (visitors as f64 / 1000.0).round() as u64)
}

/// Digits grouped with commas, e.g. `541,000`
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
