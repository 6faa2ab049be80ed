//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::ai::AiTravelSuggestion;
use crate::booking::PassengerDetails;
use crate::catalog::Location;
use crate::search::{SearchParams, SearchResult};
use crate::service::Snapshot;
use crate::workflow::{AiRequestState, BookingStep, SubmissionOutcome, SubmissionPolicy};

/// Request to choose an offer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    /// Id of an offer in the session's current results
    pub result_id: String,
}

/// Request for destination ideas.
#[derive(Debug, Deserialize)]
pub struct DestinationRequest {
    /// Origin location id
    pub origin: String,
}

/// Request to use one of the suggested destinations.
#[derive(Debug, Deserialize)]
pub struct SuggestionSelectRequest {
    /// Suggested destination name, as returned by the AI
    pub name: String,
}

/// Result of resolving a suggested destination.
#[derive(Debug, Serialize)]
pub struct SuggestionSelectResponse {
    /// Matching location, if the suggestion is one we serve
    pub location: Option<Location>,
}

/// Full state of a booking session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub step: BookingStep,
    pub submission_policy: SubmissionPolicy,

    pub search_criteria: Option<SearchParams>,
    pub search_results: Vec<SearchResult>,
    pub is_loading_results: bool,

    pub selected_shuttle: Option<SearchResult>,
    pub passenger_details: PassengerDetails,
    pub is_submitting: bool,
    pub last_submission: Option<SubmissionOutcome>,

    pub destination_suggestions: AiRequestState<Vec<String>>,
    pub travel_plan: AiRequestState<AiTravelSuggestion>,

    /// Why AI features are unavailable, if they are
    pub ai_unavailable: Option<String>,
}

impl SessionView {
    /// Build the view from a session snapshot.
    pub fn from_snapshot(snapshot: &Snapshot, ai_unavailable: Option<&str>) -> Self {
        let wf = &snapshot.workflow;
        Self {
            session_id: snapshot.id.to_string(),
            step: wf.step(),
            submission_policy: wf.policy(),
            search_criteria: wf.criteria().cloned(),
            search_results: wf.results().to_vec(),
            is_loading_results: wf.results_loading(),
            selected_shuttle: wf.selected().cloned(),
            passenger_details: wf.passenger().clone(),
            is_submitting: wf.submitting(),
            last_submission: wf.last_submission().cloned(),
            destination_suggestions: wf.destinations().clone(),
            travel_plan: wf.travel_plan().clone(),
            ai_unavailable: ai_unavailable.map(str::to_string),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionId;
    use crate::workflow::Workflow;

    #[test]
    fn fresh_session_view_serializes_camel_case() {
        let snapshot = Snapshot {
            id: SessionId::generate(),
            workflow: Workflow::default(),
        };
        let view = SessionView::from_snapshot(&snapshot, Some("AI off"));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["sessionId"], snapshot.id.as_str());
        assert_eq!(json["step"], "search");
        assert_eq!(json["submissionPolicy"], "optimistic");
        assert_eq!(json["searchCriteria"], serde_json::Value::Null);
        assert_eq!(json["searchResults"], serde_json::json!([]));
        assert_eq!(json["isLoadingResults"], false);
        assert_eq!(json["passengerDetails"]["fullName"], "");
        assert_eq!(json["destinationSuggestions"]["loading"], false);
        assert_eq!(json["aiUnavailable"], "AI off");
    }

    #[test]
    fn select_request_wire_format() {
        let req: SelectRequest = serde_json::from_str(r#"{"resultId":"result-1-0"}"#).unwrap();
        assert_eq!(req.result_id, "result-1-0");
    }
}
