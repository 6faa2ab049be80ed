//! The workflow and its transitions.

use serde_json::Value;
use tracing::{debug, warn};

use crate::ai::AiTravelSuggestion;
use crate::booking::{BookingPayload, PassengerDetails};
use crate::search::{SearchParams, SearchResult};

use super::error::WorkflowError;
use super::state::{AiRequestState, BookingStep, SubmissionOutcome, SubmissionPolicy};
use super::ticket::{BookingTicket, DestinationTicket, SearchTicket, TravelPlanTicket};

/// State of one booking session.
///
/// Invariant: while the step is `confirmation` or `booked`, a shuttle is
/// selected, and it came from the result set that was current when it was
/// selected.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    step: BookingStep,
    policy: SubmissionPolicy,

    criteria: Option<SearchParams>,
    results: Vec<SearchResult>,
    results_loading: bool,

    selected: Option<SearchResult>,
    passenger: PassengerDetails,
    submitting: bool,
    last_submission: Option<SubmissionOutcome>,

    destinations: AiRequestState<Vec<String>>,
    travel_plan: AiRequestState<AiTravelSuggestion>,

    search_gen: u64,
    booking_gen: u64,
    destination_gen: u64,
    plan_gen: u64,
}

impl Workflow {
    /// A fresh workflow on the search step.
    pub fn new(policy: SubmissionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Parameters of the most recent search, if one has been submitted.
    pub fn criteria(&self) -> Option<&SearchParams> {
        self.criteria.as_ref()
    }

    /// Offers from the most recent search.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Whether a search is waiting for its offers.
    pub fn results_loading(&self) -> bool {
        self.results_loading
    }

    pub fn selected(&self) -> Option<&SearchResult> {
        self.selected.as_ref()
    }

    pub fn passenger(&self) -> &PassengerDetails {
        &self.passenger
    }

    /// Whether a booking submission is in flight.
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_submission(&self) -> Option<&SubmissionOutcome> {
        self.last_submission.as_ref()
    }

    pub fn destinations(&self) -> &AiRequestState<Vec<String>> {
        &self.destinations
    }

    pub fn travel_plan(&self) -> &AiRequestState<AiTravelSuggestion> {
        &self.travel_plan
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Start a new search from any step.
    ///
    /// Replaces the criteria and drops everything derived from the previous
    /// search: offers, selection, passenger details, destination
    /// suggestions, and any booking in progress.
    pub fn begin_search(&mut self, params: SearchParams) -> SearchTicket {
        self.search_gen += 1;
        self.abandon_booking();
        self.reset_destinations();

        self.step = BookingStep::Search;
        self.criteria = Some(params.clone());
        self.results.clear();
        self.results_loading = true;

        debug!(generation = self.search_gen, "search started");
        SearchTicket {
            generation: self.search_gen,
            params,
        }
    }

    /// Deliver the offers for a search. Returns false if the ticket is stale.
    pub fn complete_search(&mut self, ticket: SearchTicket, results: Vec<SearchResult>) -> bool {
        if ticket.generation != self.search_gen {
            warn!(
                ticket = ticket.generation,
                current = self.search_gen,
                "dropping stale search results"
            );
            return false;
        }

        debug!(count = results.len(), "search results ready");
        self.results = results;
        self.results_loading = false;
        true
    }

    /// Pick an offer from the current results: `search → confirmation`.
    pub fn select(&mut self, result_id: &str) -> Result<&SearchResult, WorkflowError> {
        self.require(BookingStep::Search, "select a shuttle")?;

        let chosen = self
            .results
            .iter()
            .find(|r| r.id == result_id)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownResult(result_id.to_string()))?;

        self.step = BookingStep::Confirmation;
        Ok(self.selected.insert(chosen))
    }

    // ------------------------------------------------------------------
    // Confirmation
    // ------------------------------------------------------------------

    /// Replace the passenger details being edited.
    pub fn update_passenger(&mut self, details: PassengerDetails) -> Result<(), WorkflowError> {
        self.require(BookingStep::Confirmation, "edit passenger details")?;
        self.passenger = details;
        Ok(())
    }

    /// Validate passenger details and start a submission.
    ///
    /// On a validation failure nothing changes and the error carries the
    /// message to show the user.
    pub fn begin_confirm(&mut self) -> Result<BookingTicket, WorkflowError> {
        self.require(BookingStep::Confirmation, "confirm a booking")?;
        let selected = self.selected.clone().ok_or(WorkflowError::NoSelection)?;
        if self.submitting {
            return Err(WorkflowError::SubmissionInFlight);
        }
        self.passenger.validate()?;

        self.booking_gen += 1;
        self.submitting = true;
        self.last_submission = None;

        Ok(BookingTicket {
            generation: self.booking_gen,
            payload: BookingPayload {
                shuttle_details: selected,
                passenger_info: self.passenger.clone(),
            },
        })
    }

    /// Record the backend's answer and advance according to the policy.
    ///
    /// Returns false if the ticket is stale (the booking was abandoned while
    /// the submission was in flight).
    pub fn complete_confirm(
        &mut self,
        ticket: BookingTicket,
        outcome: Result<Value, String>,
    ) -> bool {
        if ticket.generation != self.booking_gen || !self.submitting {
            warn!(
                ticket = ticket.generation,
                current = self.booking_gen,
                "dropping stale booking submission result"
            );
            return false;
        }

        self.submitting = false;
        let advance = match outcome {
            Ok(response) => {
                self.last_submission = Some(SubmissionOutcome::Accepted { response });
                true
            }
            Err(message) => {
                self.last_submission = Some(SubmissionOutcome::Failed { message });
                self.policy == SubmissionPolicy::Optimistic
            }
        };

        if advance {
            self.step = BookingStep::Booked;
        }
        debug!(step = %self.step, "booking submission settled");
        true
    }

    /// Back out of confirmation: `confirmation → search`.
    ///
    /// The current offers stay so another can be picked; selection,
    /// passenger details and AI state are cleared.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        self.require(BookingStep::Confirmation, "cancel")?;
        self.abandon_booking();
        self.reset_destinations();
        self.step = BookingStep::Search;
        Ok(())
    }

    /// Throw everything away and return to an empty search screen.
    pub fn start_new_search(&mut self) {
        self.search_gen += 1;
        self.abandon_booking();
        self.reset_destinations();

        self.step = BookingStep::Search;
        self.criteria = None;
        self.results.clear();
        self.results_loading = false;
    }

    // ------------------------------------------------------------------
    // AI suggestions
    // ------------------------------------------------------------------

    /// Start a destination suggestion request (search step only).
    pub fn begin_destination_suggestions(
        &mut self,
        origin_name: impl Into<String>,
    ) -> Result<DestinationTicket, WorkflowError> {
        self.require(BookingStep::Search, "suggest destinations")?;
        self.destination_gen += 1;
        self.destinations.start();
        Ok(DestinationTicket {
            generation: self.destination_gen,
            origin_name: origin_name.into(),
        })
    }

    /// Deliver destination suggestions. Returns false if the ticket is stale.
    pub fn complete_destination_suggestions(
        &mut self,
        ticket: DestinationTicket,
        outcome: Result<Vec<String>, String>,
    ) -> bool {
        if ticket.generation != self.destination_gen {
            warn!("dropping stale destination suggestions");
            return false;
        }
        self.destinations.finish(outcome);
        true
    }

    /// AI is unavailable: surface the reason on the destination slot
    /// (search step only, like the request it stands in for).
    pub fn destinations_unavailable(
        &mut self,
        reason: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.require(BookingStep::Search, "suggest destinations")?;
        self.destinations.refuse(reason.into());
        Ok(())
    }

    /// Start a travel plan request for the booked shuttle (booked step only).
    pub fn begin_travel_plan(&mut self) -> Result<TravelPlanTicket, WorkflowError> {
        self.require(BookingStep::Booked, "suggest a travel plan")?;
        let booked = self.selected.clone().ok_or(WorkflowError::NoSelection)?;
        self.plan_gen += 1;
        self.travel_plan.start();
        Ok(TravelPlanTicket {
            generation: self.plan_gen,
            booked,
        })
    }

    /// Deliver a travel plan. Returns false if the ticket is stale.
    pub fn complete_travel_plan(
        &mut self,
        ticket: TravelPlanTicket,
        outcome: Result<AiTravelSuggestion, String>,
    ) -> bool {
        if ticket.generation != self.plan_gen {
            warn!("dropping stale travel plan");
            return false;
        }
        self.travel_plan.finish(outcome);
        true
    }

    /// AI is unavailable: surface the reason on the travel plan slot
    /// (booked step only).
    pub fn travel_plan_unavailable(
        &mut self,
        reason: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.require(BookingStep::Booked, "suggest a travel plan")?;
        self.travel_plan.refuse(reason.into());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn require(&self, step: BookingStep, action: &'static str) -> Result<(), WorkflowError> {
        if self.step == step {
            Ok(())
        } else {
            Err(WorkflowError::InvalidStep {
                action,
                step: self.step,
            })
        }
    }

    /// Drop the selection and everything that hangs off it.
    fn abandon_booking(&mut self) {
        self.booking_gen += 1;
        self.plan_gen += 1;
        self.selected = None;
        self.passenger = PassengerDetails::default();
        self.submitting = false;
        self.last_submission = None;
        self.travel_plan.clear();
    }

    fn reset_destinations(&mut self) {
        self.destination_gen += 1;
        self.destinations.clear();
    }
}
