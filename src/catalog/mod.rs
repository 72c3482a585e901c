//! Itinerary catalog and the built-in reference data behind it

pub(crate) mod data;

use crate::{
    error::{PlannerError, Result},
    types::itinerary::{DayPlan, Interest},
};
use std::collections::BTreeMap;
use tracing::debug;

/// Interest used when the catalog has no entry of its own for a request
pub const FALLBACK_INTEREST: Interest = Interest::Nature;

/// Immutable mapping from interest to a day-ascending sequence of day plans.
///
/// `lookup` is total: interests without their own entry resolve to the
/// [`FALLBACK_INTEREST`] track, which every catalog is guaranteed to hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<Interest, Vec<DayPlan>>,
}

/// Build the catalog from the built-in sample itineraries
pub fn build_catalog() -> Catalog {
    let catalog = Catalog {
        entries: data::sample_itineraries().into_iter().collect(),
    };
    debug!(
        target: "trip_planner::catalog",
        interests = catalog.entries.len(),
        "built itinerary catalog"
    );
    catalog
}

impl Catalog {
    /// Build a catalog from caller-supplied tracks.
    ///
    /// Rejects a map without a non-empty fallback track, and any track whose
    /// days are not exactly `1..=n` in order.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Interest, Vec<DayPlan>)>,
    {
        let entries: BTreeMap<Interest, Vec<DayPlan>> = entries.into_iter().collect();

        if !entries.contains_key(&FALLBACK_INTEREST) {
            return Err(PlannerError::Config(format!(
                "catalog must contain an entry for `{}`",
                FALLBACK_INTEREST
            )));
        }

        for (interest, plans) in &entries {
            if plans.is_empty() {
                return Err(PlannerError::Config(format!(
                    "catalog entry for `{}` is empty",
                    interest
                )));
            }

            for (idx, plan) in plans.iter().enumerate() {
                let expected = idx as u32 + 1;
                if plan.day != expected {
                    return Err(PlannerError::Config(format!(
                        "catalog entry for `{}` has day {} at position {} (expected day {})",
                        interest, plan.day, idx, expected
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Candidate day plans for `interest`, falling back to the Nature track
    pub fn lookup(&self, interest: Interest) -> &[DayPlan] {
        match self.entries.get(&interest) {
            Some(plans) => plans,
            None => {
                debug!(
                    target: "trip_planner::catalog",
                    %interest,
                    fallback = %FALLBACK_INTEREST,
                    "no curated track, using fallback"
                );
                self.entries
                    .get(&FALLBACK_INTEREST)
                    .map(Vec::as_slice)
                    .unwrap_or(&[])
            }
        }
    }

    /// Whether `interest` has a curated track rather than the fallback
    pub fn has_own_entry(&self, interest: Interest) -> bool {
        self.entries.contains_key(&interest)
    }

    /// Interests with curated tracks, in enum order
    pub fn interests(&self) -> Vec<Interest> {
        self.entries.keys().copied().collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        build_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, day: u32) -> DayPlan {
        DayPlan {
            id: id.to_string(),
            day,
            attraction: format!("Attraction {}", id),
            description: String::new(),
            estimated_time_range: "1 hour".to_string(),
            estimated_cost_range: "₹0".to_string(),
            weather_hint: "Clear".to_string(),
            category: "Test".to_string(),
        }
    }

    #[test]
    fn test_lookup_is_total_and_day_ascending() {
        let catalog = build_catalog();
        for interest in Interest::ALL {
            let plans = catalog.lookup(interest);
            assert!(!plans.is_empty(), "{} has no plans", interest);
            let days: Vec<u32> = plans.iter().map(|p| p.day).collect();
            let expected: Vec<u32> = (1..=plans.len() as u32).collect();
            assert_eq!(days, expected);
        }
    }

    #[test]
    fn test_uncurated_interests_fall_back_to_nature() {
        let catalog = build_catalog();
        assert!(catalog.has_own_entry(Interest::Culture));
        assert!(!catalog.has_own_entry(Interest::Adventure));
        assert_eq!(
            catalog.lookup(Interest::Adventure),
            catalog.lookup(Interest::Nature)
        );
        assert_eq!(
            catalog.lookup(Interest::Spiritual),
            catalog.lookup(Interest::Nature)
        );
        assert_eq!(catalog.interests(), vec![Interest::Nature, Interest::Culture]);
    }

    #[test]
    fn test_built_in_catalog_passes_validation() {
        let rebuilt = Catalog::from_entries(data::sample_itineraries()).unwrap();
        assert_eq!(rebuilt, build_catalog());
    }

    #[test]
    fn test_from_entries_requires_fallback() {
        let err = Catalog::from_entries(vec![(Interest::Culture, vec![plan("a", 1)])])
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("Nature"));
    }

    #[test]
    fn test_from_entries_rejects_empty_and_gapped_tracks() {
        let empty = Catalog::from_entries(vec![
            (Interest::Nature, vec![plan("a", 1)]),
            (Interest::Spiritual, vec![]),
        ]);
        assert!(empty.is_err());

        let gapped = Catalog::from_entries(vec![(
            Interest::Nature,
            vec![plan("a", 1), plan("b", 3)],
        )]);
        assert!(gapped.unwrap_err().to_string().contains("expected day 2"));
    }
}
