pub mod events;
pub mod planner;
pub mod session;
pub mod timer;

pub use crate::services::selector::{clamp_day_count, select};
pub use crate::types::result::{GenerationOutcome, Itinerary, TripSummary};
pub use events::{SessionEvent, SessionLog, DEFAULT_LOG_CAPACITY};
pub use planner::{PendingGeneration, Planner};
pub use session::{RequestSession, ResolveOutcome, SessionStatus, Ticket};
pub use timer::{DelayTimer, ImmediateTimer, ThinkingTimer, DEFAULT_THINKING_DELAY};
