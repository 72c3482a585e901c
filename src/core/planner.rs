use super::{
    session::{RequestSession, ResolveOutcome, Ticket},
    timer::{DelayTimer, ThinkingTimer},
};
use crate::{
    catalog::{build_catalog, Catalog},
    config::PlannerConfig,
    error::{PlannerError, Result},
    services::selector::select,
    types::{
        itinerary::{DayPlan, TripRequest},
        result::{GenerationOutcome, Itinerary},
    },
};
use std::{sync::Arc, time::Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Entry point for the presentation layer
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Arc<Catalog>,
    timer: Arc<dyn ThinkingTimer>,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            catalog: Arc::new(build_catalog()),
            timer: Arc::new(DelayTimer::new(config.thinking_delay)),
            config,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(PlannerConfig::from_env()?))
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn with_timer<T: ThinkingTimer + 'static>(mut self, timer: T) -> Self {
        self.timer = Arc::new(timer);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// New idle session bound to this planner's catalog
    pub fn session(&self) -> RequestSession {
        RequestSession::new(Arc::clone(&self.catalog))
    }

    /// Select day plans right away, with no session and no delay
    pub fn plan(&self, request: &TripRequest) -> Vec<DayPlan> {
        select(&self.catalog, request.interest, request.days)
    }

    /// Submit `request`, wait out the thinking delay, then resolve.
    ///
    /// Returns `Suppressed` if the session was cancelled or reset meanwhile.
    pub async fn generate(
        &self,
        session: &RequestSession,
        request: TripRequest,
    ) -> Result<GenerationOutcome> {
        let start = Instant::now();
        let ticket = session.submit(request.clone())?;
        info!(
            target: "trip_planner::planner",
            %ticket,
            interest = %request.interest,
            days = request.days,
            "generating itinerary"
        );

        finish(self.timer.as_ref(), session, ticket, request, start).await
    }

    /// Like [`Planner::generate`] but runs the delay on a spawned task.
    ///
    /// The submission happens before this returns, so the session is already
    /// `Generating` and the returned handle can cancel it.
    pub fn spawn_generate(
        &self,
        session: Arc<RequestSession>,
        request: TripRequest,
    ) -> Result<PendingGeneration> {
        let start = Instant::now();
        let ticket = session.submit(request.clone())?;
        info!(
            target: "trip_planner::planner",
            %ticket,
            interest = %request.interest,
            days = request.days,
            "generating itinerary in background"
        );

        let timer = Arc::clone(&self.timer);
        let task_session = Arc::clone(&session);
        let handle = tokio::spawn(async move {
            finish(timer.as_ref(), &task_session, ticket, request, start).await
        });

        Ok(PendingGeneration {
            ticket,
            session,
            handle,
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

async fn finish(
    timer: &dyn ThinkingTimer,
    session: &RequestSession,
    ticket: Ticket,
    request: TripRequest,
    start: Instant,
) -> Result<GenerationOutcome> {
    timer.wait().await;

    match session.resolve_ticket(ticket)? {
        ResolveOutcome::Applied(days) => {
            let itinerary = Itinerary::new(request, days, start.elapsed());
            info!(
                target: "trip_planner::planner",
                %ticket,
                days = itinerary.day_count(),
                elapsed_ms = itinerary.duration.as_millis() as u64,
                "itinerary ready"
            );
            Ok(GenerationOutcome::Completed(itinerary))
        }
        ResolveOutcome::Suppressed => {
            debug!(target: "trip_planner::planner", %ticket, "generation suppressed");
            Ok(GenerationOutcome::Suppressed)
        }
    }
}

/// Background generation started by [`Planner::spawn_generate`]
#[derive(Debug)]
pub struct PendingGeneration {
    ticket: Ticket,
    session: Arc<RequestSession>,
    handle: JoinHandle<Result<GenerationOutcome>>,
}

impl PendingGeneration {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Abandon the submission; its result will never reach the session
    pub fn cancel(&self) {
        self.session.cancel_pending();
    }

    /// Wait for the background task to finish
    pub async fn outcome(self) -> Result<GenerationOutcome> {
        let ticket = self.ticket;
        self.handle.await.map_err(|err| {
            PlannerError::Interrupted(format!("generation task for #{} failed: {}", ticket, err))
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{session::SessionStatus, timer::ImmediateTimer},
        types::itinerary::{Budget, Interest},
    };
    use std::time::Duration;

    #[tokio::test]
    async fn test_generate_with_immediate_timer() {
        let planner = Planner::default().with_timer(ImmediateTimer);
        let session = planner.session();

        let outcome = planner
            .generate(&session, TripRequest::new(2, Interest::Culture, Budget::Low))
            .await
            .unwrap();

        let itinerary = outcome.itinerary().unwrap();
        assert_eq!(
            itinerary.attractions(),
            vec!["Jagannath Temple, Ranchi", "Tribal Research Institute Museum"]
        );
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[tokio::test]
    async fn test_generate_rejects_double_submission() {
        let planner = Planner::new(
            PlannerConfig::default().with_thinking_delay(Duration::from_millis(50)),
        );
        let session = Arc::new(planner.session());

        let pending = planner
            .spawn_generate(Arc::clone(&session), TripRequest::default())
            .unwrap();
        let err = planner
            .generate(&session, TripRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_recoverable());

        let outcome = pending.outcome().await.unwrap();
        assert_eq!(outcome.itinerary().map(|i| i.day_count()), Some(3));
    }

    #[test]
    fn test_plan_is_synchronous() {
        let planner = Planner::default();
        let plans = planner.plan(&TripRequest::new(100, Interest::Adventure, Budget::High));
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].attraction, "Betla National Park");
    }
}
