//! Booking service: the I/O around the workflow.
//!
//! Each operation locks the session's workflow just long enough to run a
//! transition, releases it for any waiting (simulated search latency,
//! booking backend, AI service), then locks again to apply the outcome.
//! Requests on the same session can therefore overlap; the workflow's
//! tickets decide which outcomes still apply.
//!
//! The wait-and-apply half runs on its own task, so a client that goes away
//! mid-request never leaves a ticket unsettled.

use std::future::Future;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};

use crate::ai::{
    AiAvailability, DESTINATION_FAILED_MESSAGE, TRAVEL_PLAN_FAILED_MESSAGE, suggest_destinations,
    suggest_travel_plan,
};
use crate::booking::{BookingBackend, PassengerDetails};
use crate::catalog::{self, Location};
use crate::search::{SearchParams, SearchResult, generate_results};
use crate::session::{SessionError, SessionId, SessionStore, SharedWorkflow};
use crate::workflow::{Workflow, WorkflowError};

/// Default simulated search latency.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1500);

/// Errors from service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The task settling a request panicked or was aborted
    #[error("session task failed: {0}")]
    Task(String),
}

/// A session's state at the end of an operation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub id: SessionId,
    pub workflow: Workflow,
}

/// Runs booking sessions against the booking backend and AI service.
pub struct ShuttleService {
    sessions: SessionStore,
    booking: Arc<dyn BookingBackend>,
    ai: AiAvailability,
    search_delay: Duration,
    rng: StdMutex<StdRng>,
}

impl ShuttleService {
    /// Create a service over the given sessions and collaborators.
    pub fn new(
        sessions: SessionStore,
        booking: Arc<dyn BookingBackend>,
        ai: AiAvailability,
    ) -> Self {
        Self {
            sessions,
            booking,
            ai,
            search_delay: DEFAULT_SEARCH_DELAY,
            rng: StdMutex::new(StdRng::from_entropy()),
        }
    }

    /// Set the simulated search latency.
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Seed offer generation (for reproducible runs).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdMutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Why AI features are off, if they are.
    pub fn ai_disabled_reason(&self) -> Option<&str> {
        self.ai.disabled_reason()
    }

    /// Open a new session.
    pub async fn create_session(&self) -> Snapshot {
        let (id, workflow) = self.sessions.create().await;
        let workflow = workflow.lock().await.clone();
        Snapshot { id, workflow }
    }

    /// Current state of a session.
    pub async fn snapshot(&self, session: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;
        Ok(snapshot(id, &workflow).await)
    }

    /// Run a search and wait for its offers.
    ///
    /// If another search or a reset happens on the session in the meantime,
    /// these offers are discarded and the snapshot shows the newer state.
    pub async fn search(
        &self,
        session: &str,
        params: SearchParams,
    ) -> Result<Snapshot, ServiceError> {
        params.validate().map_err(WorkflowError::from)?;
        let (id, workflow) = self.sessions.get(session).await?;

        let ticket = workflow.lock().await.begin_search(params);
        info!(
            session = %id,
            from = %ticket.params.leaving_from,
            to = %ticket.params.going_to,
            "searching"
        );

        let results = self.roll_results(&ticket.params);
        let delay = self.search_delay;
        let task = {
            let workflow = Arc::clone(&workflow);
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let mut guard = workflow.lock().await;
                guard.complete_search(ticket, results);
                guard.clone()
            }
        };
        settle(id, task).await
    }

    /// Choose an offer from the current results.
    pub async fn select(&self, session: &str, result_id: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;
        let mut guard = workflow.lock().await;
        guard.select(result_id)?;
        Ok(Snapshot {
            id,
            workflow: guard.clone(),
        })
    }

    /// Replace the passenger details on the confirmation step.
    pub async fn update_passenger(
        &self,
        session: &str,
        details: PassengerDetails,
    ) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;
        let mut guard = workflow.lock().await;
        guard.update_passenger(details)?;
        Ok(Snapshot {
            id,
            workflow: guard.clone(),
        })
    }

    /// Validate the passenger and submit the booking.
    ///
    /// Validation failures return an error and leave the session untouched.
    /// Backend failures are logged and recorded on the session; whether the
    /// session still advances is up to its submission policy.
    pub async fn confirm(&self, session: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;

        let ticket = workflow.lock().await.begin_confirm()?;
        info!(
            session = %id,
            shuttle = %ticket.payload.shuttle_details.id,
            "submitting booking"
        );

        let task = {
            let booking = Arc::clone(&self.booking);
            let workflow = Arc::clone(&workflow);
            let session = id.clone();
            async move {
                let outcome = match booking.submit(&ticket.payload).await {
                    Ok(ack) => {
                        info!(%session, "booking data sent to backend");
                        Ok(ack)
                    }
                    Err(e) => {
                        error!(%session, error = %e, "failed to send booking data to backend");
                        Err(e.to_string())
                    }
                };

                let mut guard = workflow.lock().await;
                guard.complete_confirm(ticket, outcome);
                guard.clone()
            }
        };
        settle(id, task).await
    }

    /// Leave the confirmation step without booking.
    pub async fn cancel(&self, session: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;
        let mut guard = workflow.lock().await;
        guard.cancel()?;
        Ok(Snapshot {
            id,
            workflow: guard.clone(),
        })
    }

    /// Start over with an empty search.
    pub async fn start_new_search(&self, session: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;
        let mut guard = workflow.lock().await;
        guard.start_new_search();
        Ok(Snapshot {
            id,
            workflow: guard.clone(),
        })
    }

    /// Ask the AI for destinations reachable from `origin_id`.
    ///
    /// AI problems never fail the request: they land in the session's
    /// destination slot as an error message.
    pub async fn suggest_destinations(
        &self,
        session: &str,
        origin_id: &str,
    ) -> Result<Snapshot, ServiceError> {
        let origin = catalog::location(origin_id)
            .ok_or_else(|| WorkflowError::UnknownLocation(origin_id.to_string()))?;
        let (id, workflow) = self.sessions.get(session).await?;

        let generator = match self.ai.generator() {
            Ok(generator) => generator,
            Err(reason) => {
                workflow.lock().await.destinations_unavailable(reason)?;
                return Ok(snapshot(id, &workflow).await);
            }
        };

        let ticket = workflow
            .lock()
            .await
            .begin_destination_suggestions(origin.name)?;

        let task = {
            let workflow = Arc::clone(&workflow);
            let session = id.clone();
            async move {
                let outcome = suggest_destinations(generator.as_ref(), &ticket.origin_name)
                    .await
                    .map_err(|e| {
                        error!(%session, error = %e, "error fetching AI destination suggestions");
                        DESTINATION_FAILED_MESSAGE.to_string()
                    });

                let mut guard = workflow.lock().await;
                guard.complete_destination_suggestions(ticket, outcome);
                guard.clone()
            }
        };
        settle(id, task).await
    }

    /// Resolve a suggested destination name to a known location.
    ///
    /// Does not change the session; a client can use the location to fill
    /// in its destination field.
    pub async fn select_suggestion(
        &self,
        session: &str,
        name: &str,
    ) -> Result<Option<&'static Location>, ServiceError> {
        let (id, _) = self.sessions.get(session).await?;
        let matched = catalog::location_by_name(name);
        match matched {
            Some(location) => {
                info!(session = %id, suggestion = name, location = location.id, "AI suggestion selected")
            }
            None => warn!(session = %id, suggestion = name, "AI suggestion is not a served location"),
        }
        Ok(matched)
    }

    /// Ask the AI what to do at the booked destination.
    pub async fn suggest_travel_plan(&self, session: &str) -> Result<Snapshot, ServiceError> {
        let (id, workflow) = self.sessions.get(session).await?;

        let generator = match self.ai.generator() {
            Ok(generator) => generator,
            Err(reason) => {
                workflow.lock().await.travel_plan_unavailable(reason)?;
                return Ok(snapshot(id, &workflow).await);
            }
        };

        let ticket = workflow.lock().await.begin_travel_plan()?;

        let task = {
            let workflow = Arc::clone(&workflow);
            let session = id.clone();
            async move {
                let outcome = suggest_travel_plan(generator.as_ref(), &ticket.booked)
                    .await
                    .map_err(|e| {
                        error!(%session, error = %e, "error fetching AI travel plan");
                        TRAVEL_PLAN_FAILED_MESSAGE.to_string()
                    });

                let mut guard = workflow.lock().await;
                guard.complete_travel_plan(ticket, outcome);
                guard.clone()
            }
        };
        settle(id, task).await
    }

    /// Draw offers for a search from the service's RNG.
    fn roll_results(&self, params: &SearchParams) -> Vec<SearchResult> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_results(params, &mut *rng)
    }
}

async fn snapshot(id: SessionId, workflow: &SharedWorkflow) -> Snapshot {
    let workflow = workflow.lock().await.clone();
    Snapshot { id, workflow }
}

/// Run the completion half of a request to the end on its own task.
///
/// The caller only waits for it; dropping the caller leaves the task to
/// settle its ticket.
async fn settle<F>(id: SessionId, task: F) -> Result<Snapshot, ServiceError>
where
    F: Future<Output = Workflow> + Send + 'static,
{
    match tokio::spawn(task).await {
        Ok(workflow) => Ok(Snapshot { id, workflow }),
        Err(e) => {
            error!(session = %id, error = %e, "session task failed");
            Err(ServiceError::Task(e.to_string()))
        }
    }
}
