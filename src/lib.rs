//! trip-planner-rs: itinerary selection and reference listings for a Jharkhand tourism app
//!
//! The trip planner is a deterministic lookup: an interest picks a curated track
//! from the [`Catalog`], and the requested number of days takes a prefix of it.
//! A [`RequestSession`] tracks one planning interaction and guards against
//! double submission; the [`Planner`] drives it through a cancellable
//! "thinking" delay for the presentation layer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{Budget, Interest, Planner, PlannerConfig, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Planner::new(PlannerConfig::default());
//!     let session = planner.session();
//!
//!     let request = TripRequest::new(3, Interest::Nature, Budget::Medium);
//!     let outcome = planner.generate(&session, request).await?;
//!
//!     if let Some(itinerary) = outcome.itinerary() {
//!         println!("{}", itinerary.render(&planner.config().theme));
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod listings;
pub mod schemas;
pub(crate) mod services;
pub mod theme;
pub mod types;

pub use catalog::{build_catalog, Catalog, FALLBACK_INTEREST};
pub use config::PlannerConfig;
pub use crate::core::{
    clamp_day_count, select, DelayTimer, GenerationOutcome, ImmediateTimer, Itinerary,
    PendingGeneration, Planner, RequestSession, ResolveOutcome, SessionEvent, SessionStatus,
    ThinkingTimer, Ticket, TripSummary,
};
pub use error::{PlannerError, Result};
pub use listings::ReferenceData;
pub use schemas::{parse_trip_request, SchemaHandle};
pub use theme::{Color, Theme, ThemeRole};
pub use types::{
    Budget, DayPlan, District, Guide, Interest, ListingKind, MarketplaceItem, TouristStats,
    TripRequest, TRIP_DAYS,
};

#[cfg(feature = "cli")]
pub mod cli;
