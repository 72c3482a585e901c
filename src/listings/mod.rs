//! Marketplace, guide, district and visitor-statistics listings

pub mod guides;
pub mod marketplace;
pub mod stats;

pub use guides::{filter_guides, guide_filters, GuideFilter, SPECIALIZATIONS};
pub use marketplace::{filter_marketplace, marketplace_counts, MarketplaceCounts, MarketplaceFilter};
pub use stats::{
    bar_heights, group_digits, thousands_label, top_months, VisitorSummary, TOP_MONTHS,
};

use crate::{
    catalog::data,
    types::listings::{District, Guide, MarketplaceItem, TouristStats},
};

/// Read-only listing data shown outside the trip planner
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    marketplace: Vec<MarketplaceItem>,
    guides: Vec<Guide>,
    districts: Vec<District>,
    stats: Vec<TouristStats>,
}

impl ReferenceData {
    pub fn built_in() -> Self {
        Self {
            marketplace: data::marketplace_items(),
            guides: data::verified_guides(),
            districts: data::districts(),
            stats: data::tourist_stats(),
        }
    }

    pub fn marketplace(&self, filter: MarketplaceFilter) -> Vec<&MarketplaceItem> {
        filter_marketplace(&self.marketplace, filter)
    }

    pub fn marketplace_counts(&self) -> MarketplaceCounts {
        marketplace_counts(&self.marketplace)
    }

    pub fn guides(&self, filter: &GuideFilter) -> Vec<&Guide> {
        filter_guides(&self.guides, filter)
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn district(&self, id: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn stats(&self) -> &[TouristStats] {
        &self.stats
    }

    pub fn visitor_summary(&self) -> VisitorSummary {
        VisitorSummary::from_stats(&self.stats)
    }

    /// Ranked busiest months, see [`top_months`]
    pub fn top_months(&self, n: usize) -> Vec<(usize, &TouristStats)> {
        top_months(&self.stats, n)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_lookup() {
        let data = ReferenceData::built_in();
        assert_eq!(data.districts().len(), 3);
        let jamshedpur = data.district("jamshedpur").unwrap();
        assert!(jamshedpur.highlights.contains(&"Dalma Hills".to_string()));
        assert!(data.district("gumla").is_none());
    }

    #[test]
    fn test_verified_guides_flag() {
        let data = ReferenceData::built_in();
        let unverified: Vec<_> = data
            .guides(&GuideFilter::All)
            .into_iter()
            .filter(|g| !g.verified)
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(unverified, vec!["Amit Singh"]);
    }
}
