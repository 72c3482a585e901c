use crate::{
    error::PlannerError,
    types::listings::{ListingKind, MarketplaceItem},
};
use serde::Serialize;
use std::str::FromStr;

/// Tab selected on the marketplace screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketplaceFilter {
    #[default]
    All,
    Kind(ListingKind),
}

impl MarketplaceFilter {
    pub fn matches(&self, item: &MarketplaceItem) -> bool {
        match self {
            MarketplaceFilter::All => true,
            MarketplaceFilter::Kind(kind) => item.kind == *kind,
        }
    }
}

impl FromStr for MarketplaceFilter {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MarketplaceFilter::All),
            "handicraft" | "handicrafts" => Ok(MarketplaceFilter::Kind(ListingKind::Handicraft)),
            "homestay" | "homestays" => Ok(MarketplaceFilter::Kind(ListingKind::Homestay)),
            other => Err(PlannerError::Validation(format!(
                "unknown marketplace filter `{}` (expected all, handicraft or homestay)",
                other
            ))),
        }
    }
}

/// Item counts shown on the filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketplaceCounts {
    pub all: usize,
    pub handicraft: usize,
    pub homestay: usize,
}

pub fn filter_marketplace(
    items: &[MarketplaceItem],
    filter: MarketplaceFilter,
) -> Vec<&MarketplaceItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub fn marketplace_counts(items: &[MarketplaceItem]) -> MarketplaceCounts {
    let count = |kind: ListingKind| items.iter().filter(|item| item.kind == kind).count();
    MarketplaceCounts {
        all: items.len(),
        handicraft: count(ListingKind::Handicraft),
        homestay: count(ListingKind::Homestay),
    }
}
