use crate::{
    catalog::Catalog,
    types::itinerary::{DayPlan, Interest},
};

/// Number of day plans returned for `days` out of `available` candidates.
///
/// Non-positive requests count as one day; requests beyond the catalog get
/// everything there is.
pub fn clamp_day_count(days: i64, available: usize) -> usize {
    let floor = days.max(1);
    usize::try_from(floor).map_or(available, |requested| requested.min(available))
}

/// First `days` entries of the interest's track, in catalog order
pub fn select(catalog: &Catalog, interest: Interest, days: i64) -> Vec<DayPlan> {
    let candidates = catalog.lookup(interest);
    let count = clamp_day_count(days, candidates.len());
    candidates[..count].to_vec()
}
