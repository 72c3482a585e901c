use super::session::{SessionStatus, Ticket};
use crate::types::itinerary::TripRequest;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{info, warn};

/// A single transition recorded by a [`super::RequestSession`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A request was accepted and the session started generating
    Submitted { ticket: Ticket, request: TripRequest },
    /// The selector ran and the result was applied
    Resolved { ticket: Ticket, days: usize },
    /// A resolve arrived for a submission that is no longer live
    Suppressed { ticket: Ticket },
    /// The pending submission was abandoned before it resolved
    Cancelled { ticket: Ticket },
    /// Request and result were cleared
    Reset { from: SessionStatus },
    /// A transition was refused
    Rejected {
        action: String,
        status: SessionStatus,
    },
}

impl SessionEvent {
    /// Get a human-readable description of the event
    pub fn describe(&self) -> String {
        match self {
            SessionEvent::Submitted { ticket, request } => format!(
                "🧭 Submitted #{}: {} days of {} ({} budget)",
                ticket, request.days, request.interest, request.budget
            ),
            SessionEvent::Resolved { ticket, days } => {
                format!("✅ Resolved #{} with {} day plan(s)", ticket, days)
            }
            SessionEvent::Suppressed { ticket } => {
                format!("🔇 Suppressed stale resolve for #{}", ticket)
            }
            SessionEvent::Cancelled { ticket } => format!("✋ Cancelled #{}", ticket),
            SessionEvent::Reset { from } => format!("🔄 Reset from {}", from),
            SessionEvent::Rejected { action, status } => {
                format!("❌ Rejected {} while {}", action, status)
            }
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, SessionEvent::Rejected { .. })
    }
}

/// Events kept by a [`SessionLog`] built with [`SessionLog::new`]
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// Transition history for one session, oldest first.
///
/// The log lives as long as its session and survives `reset`. Once
/// `capacity` events are held, each new event evicts the oldest one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    events: VecDeque<SessionEvent>,
    capacity: usize,
    /// Events evicted so far
    dropped: usize,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Log keeping at most `capacity` events (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    /// Record an event and trace it
    pub fn record(&mut self, event: SessionEvent) {
        let description = event.describe();
        if event.is_rejection() {
            warn!(target: "trip_planner::session", "{}", description);
        } else {
            info!(target: "trip_planner::session", "{}", description);
        }

        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &SessionEvent> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&SessionEvent> {
        self.events.back()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of events evicted to stay within capacity
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn count_rejections(&self) -> usize {
        self.events.iter().filter(|e| e.is_rejection()).count()
    }

    /// Human-readable replay of the retained history.
    ///
    /// Numbering counts every recorded event, evicted ones included.
    pub fn replay(&self) -> String {
        self.events
            .iter()
            .enumerate()
            .map(|(idx, event)| format!("{}. {}", self.dropped + idx + 1, event.describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}
