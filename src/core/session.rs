use super::events::{SessionEvent, SessionLog};
use crate::{
    catalog::Catalog,
    error::{PlannerError, Result},
    services::selector::select,
    types::itinerary::{DayPlan, TripRequest},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Lifecycle of a planning request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Generating,
    Completed,
    /// Transient: only observed inside `reset`, which always ends in `Idle`
    Reset,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Generating => "generating",
            SessionStatus::Completed => "completed",
            SessionStatus::Reset => "reset",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one submission. A resolve carrying a ticket that is no longer
/// live is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a ticketed resolve did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The selector ran; carries the day plans now held by the session
    Applied(Vec<DayPlan>),
    /// The submission was cancelled, reset or superseded; nothing changed
    Suppressed,
}

#[derive(Debug)]
struct SessionState {
    status: SessionStatus,
    request: Option<TripRequest>,
    result: Vec<DayPlan>,
    live_ticket: Option<Ticket>,
    issued: u64,
    log: SessionLog,
}

impl SessionState {
    fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            request: None,
            result: Vec::new(),
            live_ticket: None,
            issued: 0,
            log: SessionLog::new(),
        }
    }

    fn reject(&mut self, action: &'static str) -> PlannerError {
        self.log.record(SessionEvent::Rejected {
            action: action.to_string(),
            status: self.status,
        });
        PlannerError::invalid_transition(action, self.status)
    }

    fn clear(&mut self) {
        self.request = None;
        self.result.clear();
        self.live_ticket = None;
        self.status = SessionStatus::Idle;
    }
}

/// Transient state of one planning interaction.
///
/// Every transition and read runs under one lock, so transitions never
/// interleave. A transition that is not allowed from the current status is
/// rejected with [`PlannerError::InvalidTransition`]; contention alone never
/// rejects anything.
#[derive(Debug)]
pub struct RequestSession {
    catalog: Arc<Catalog>,
    state: Mutex<SessionState>,
}

impl RequestSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Mutex::new(SessionState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start generating for `request`. Allowed from `Idle` or `Completed`.
    pub fn submit(&self, request: TripRequest) -> Result<Ticket> {
        let mut state = self.lock();

        let status = state.status;
        if !matches!(status, SessionStatus::Idle | SessionStatus::Completed) {
            return Err(state.reject("submit"));
        }

        state.issued += 1;
        let ticket = Ticket::new(state.issued);
        state.status = SessionStatus::Generating;
        state.result.clear();
        state.request = Some(request.clone());
        state.live_ticket = Some(ticket);
        state.log.record(SessionEvent::Submitted { ticket, request });

        Ok(ticket)
    }

    /// Run the selector for the live submission. Allowed only from `Generating`.
    pub fn resolve(&self) -> Result<()> {
        let mut state = self.lock();
        if state.status != SessionStatus::Generating {
            return Err(state.reject("resolve"));
        }
        self.apply(&mut state);
        Ok(())
    }

    /// Resolve on behalf of a delayed boundary task.
    ///
    /// Applies only while `ticket` is still the live submission; otherwise the
    /// session is left untouched and `Suppressed` is returned.
    pub fn resolve_ticket(&self, ticket: Ticket) -> Result<ResolveOutcome> {
        let mut state = self.lock();

        if state.status != SessionStatus::Generating || state.live_ticket != Some(ticket) {
            state.log.record(SessionEvent::Suppressed { ticket });
            return Ok(ResolveOutcome::Suppressed);
        }

        Ok(ResolveOutcome::Applied(self.apply(&mut state)))
    }

    fn apply(&self, state: &mut SessionState) -> Vec<DayPlan> {
        if let Some(request) = &state.request {
            state.result = select(&self.catalog, request.interest, request.days);
        }
        state.status = SessionStatus::Completed;

        if let Some(ticket) = state.live_ticket.take() {
            let days = state.result.len();
            state.log.record(SessionEvent::Resolved { ticket, days });
        }

        state.result.clone()
    }

    /// Clear request and result from any state and return to `Idle`.
    ///
    /// Any pending submission is invalidated.
    pub fn reset(&self) {
        let mut state = self.lock();
        let from = state.status;
        state.status = SessionStatus::Reset;
        state.clear();
        state.log.record(SessionEvent::Reset { from });
    }

    /// Abandon the pending submission, if any, so its result is never applied.
    ///
    /// A session that is not generating is left as is.
    pub fn cancel_pending(&self) {
        let mut state = self.lock();
        if state.status != SessionStatus::Generating {
            return;
        }
        let pending = state.live_ticket;
        if let Some(ticket) = pending {
            state.clear();
            state.log.record(SessionEvent::Cancelled { ticket });
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    /// Day plans of the last resolved submission, empty unless `Completed`
    pub fn current_result(&self) -> Vec<DayPlan> {
        self.lock().result.clone()
    }

    pub fn current_request(&self) -> Option<TripRequest> {
        self.lock().request.clone()
    }

    /// Ticket of the submission still waiting to resolve
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.lock().live_ticket
    }

    /// Retained events, oldest first
    pub fn events(&self) -> Vec<SessionEvent> {
        self.lock().log.events().cloned().collect()
    }

    /// Human-readable replay of every transition so far
    pub fn replay(&self) -> String {
        self.lock().log.replay()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::build_catalog,
        types::itinerary::{Budget, Interest},
    };

    fn session() -> RequestSession {
        RequestSession::new(Arc::new(build_catalog()))
    }

    #[test]
    fn test_submit_resolve_nature_three_days() {
        let session = session();
        assert_eq!(session.status(), SessionStatus::Idle);

        session
            .submit(TripRequest::new(3, Interest::Nature, Budget::Medium))
            .unwrap();
        assert_eq!(session.status(), SessionStatus::Generating);
        assert!(session.current_result().is_empty());

        session.resolve().unwrap();
        assert_eq!(session.status(), SessionStatus::Completed);

        let result = session.current_result();
        let names: Vec<(u32, &str)> = result
            .iter()
            .map(|p| (p.day, p.attraction.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                (1, "Betla National Park"),
                (2, "Hundru Falls"),
                (3, "Dalma Wildlife Sanctuary"),
            ]
        );
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let session = session();
        session.submit(TripRequest::default()).unwrap();

        let err = session.submit(TripRequest::default()).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidTransition {
                action: "submit",
                status: SessionStatus::Generating
            }
        ));
        assert_eq!(session.status(), SessionStatus::Generating);
    }

    #[test]
    fn test_resolve_requires_generating() {
        let session = session();
        assert!(session.resolve().is_err());

        session.submit(TripRequest::default()).unwrap();
        session.resolve().unwrap();

        let err = session.resolve().unwrap_err();
        assert!(err.to_string().contains("completed"));
        assert_eq!(session.current_result().len(), 3);
    }

    #[test]
    fn test_resubmit_from_completed_clears_result() {
        let session = session();
        session.submit(TripRequest::default()).unwrap();
        session.resolve().unwrap();

        session
            .submit(TripRequest::new(1, Interest::Culture, Budget::Low))
            .unwrap();
        assert!(session.current_result().is_empty());
        assert_eq!(
            session.current_request().map(|r| r.interest),
            Some(Interest::Culture)
        );
    }

    #[test]
    fn test_reset_from_every_state() {
        let session = session();
        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);

        session.submit(TripRequest::default()).unwrap();
        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.current_request().is_none());

        session.submit(TripRequest::default()).unwrap();
        session.resolve().unwrap();
        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.current_result().is_empty());
        assert!(session.current_request().is_none());
    }

    #[test]
    fn test_cancel_pending_suppresses_result() {
        let session = session();
        let ticket = session.submit(TripRequest::default()).unwrap();

        session.cancel_pending();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.pending_ticket().is_none());

        assert_eq!(
            session.resolve_ticket(ticket).unwrap(),
            ResolveOutcome::Suppressed
        );
        assert!(session.resolve().is_err());
        assert!(session.current_result().is_empty());
    }

    #[test]
    fn test_stale_ticket_does_not_touch_new_submission() {
        let session = session();
        let stale = session.submit(TripRequest::default()).unwrap();
        session.reset();

        let live = session
            .submit(TripRequest::new(2, Interest::Culture, Budget::High))
            .unwrap();
        assert_ne!(stale, live);

        assert_eq!(
            session.resolve_ticket(stale).unwrap(),
            ResolveOutcome::Suppressed
        );
        assert_eq!(session.status(), SessionStatus::Generating);

        match session.resolve_ticket(live).unwrap() {
            ResolveOutcome::Applied(plans) => assert_eq!(plans, session.current_result()),
            ResolveOutcome::Suppressed => panic!("live ticket was suppressed"),
        }
        assert_eq!(session.current_result().len(), 2);
    }

    #[test]
    fn test_cancel_pending_outside_generating_is_noop() {
        let session = session();
        session.submit(TripRequest::default()).unwrap();
        session.resolve().unwrap();

        session.cancel_pending();
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.current_result().len(), 3);
    }

    #[test]
    fn test_resolve_waits_for_concurrent_readers() {
        let session = Arc::new(session());

        for _ in 0..200 {
            session.reset();
            let ticket = session.submit(TripRequest::default()).unwrap();

            let reader = {
                let session = Arc::clone(&session);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let _ = session.status();
                        let _ = session.current_result();
                    }
                })
            };

            let outcome = session.resolve_ticket(ticket).unwrap();
            assert!(matches!(outcome, ResolveOutcome::Applied(ref plans) if plans.len() == 3));
            reader.join().unwrap();
            assert_eq!(session.status(), SessionStatus::Completed);
        }
    }

    #[test]
    fn test_event_log_records_transitions() {
        let session = session();
        let ticket = session.submit(TripRequest::default()).unwrap();
        let _ = session.submit(TripRequest::default());
        session.resolve_ticket(ticket).unwrap();
        session.reset();

        let events = session.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], SessionEvent::Submitted { .. }));
        assert!(events[1].is_rejection());
        assert!(matches!(events[2], SessionEvent::Resolved { days: 3, .. }));
        assert!(matches!(
            events[3],
            SessionEvent::Reset {
                from: SessionStatus::Completed
            }
        ));
        assert!(session.replay().contains("Resolved #1"));
    }
}
