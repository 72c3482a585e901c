pub mod itinerary;
pub mod listings;
pub mod result;

pub use itinerary::{Budget, DayPlan, Interest, TripRequest, TRIP_DAYS};
pub use listings::{District, Guide, ListingKind, MarketplaceItem, TouristStats};
pub use result::{GenerationOutcome, Itinerary, TripSummary};
