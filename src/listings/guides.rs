use crate::types::listings::Guide;
use std::{convert::Infallible, str::FromStr};

/// Specializations offered as filter chips, in display order
pub const SPECIALIZATIONS: [&str; 4] = [
    "Wildlife & Nature Tours",
    "Cultural & Heritage Tours",
    "Adventure & Trekking",
    "Spiritual & Temple Tours",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuideFilter {
    #[default]
    All,
    /// Exact specialization match
    Specialization(String),
}

impl GuideFilter {
    pub fn matches(&self, guide: &Guide) -> bool {
        match self {
            GuideFilter::All => true,
            GuideFilter::Specialization(spec) => guide.specialization == *spec,
        }
    }

    /// Chip label
    pub fn label(&self) -> &str {
        match self {
            GuideFilter::All => "All Guides",
            GuideFilter::Specialization(spec) => spec,
        }
    }
}

impl FromStr for GuideFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(GuideFilter::All)
        } else {
            Ok(GuideFilter::Specialization(trimmed.to_string()))
        }
    }
}

pub fn filter_guides<'a>(guides: &'a [Guide], filter: &GuideFilter) -> Vec<&'a Guide> {
    guides.iter().filter(|guide| filter.matches(guide)).collect()
}

/// Every chip on the guides screen, "All Guides" first
pub fn guide_filters() -> Vec<GuideFilter> {
    std::iter::once(GuideFilter::All)
        .chain(
            SPECIALIZATIONS
                .iter()
                .map(|spec| GuideFilter::Specialization(spec.to_string())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::verified_guides;

    #[test]
    fn test_filter_by_specialization() {
        let guides = verified_guides();
        let filter: GuideFilter = "Cultural & Heritage Tours".parse().unwrap();
        let matched = filter_guides(&guides, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Sunita Devi");
    }

    #[test]
    fn test_all_filter_keeps_everyone() {
        let guides = verified_guides();
        assert_eq!(filter_guides(&guides, &GuideFilter::All).len(), guides.len());
    }

    #[test]
    fn test_unknown_specialization_matches_nothing() {
        let guides = verified_guides();
        let filter = GuideFilter::Specialization("Food Tours".to_string());
        assert!(filter_guides(&guides, &filter).is_empty());
    }

    #[test]
    fn test_guide_filters_order() {
        let filters = guide_filters();
        assert_eq!(filters.len(), 5);
        assert_eq!(filters[0].label(), "All Guides");
        assert_eq!(filters[4].label(), "Spiritual & Temple Tours");
    }
}
