//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::{LOCATIONS, Location, SHUTTLE_TYPES, ShuttleType};
use crate::search::SearchResult;
use crate::service::Snapshot;
use crate::workflow::{BookingStep, SubmissionOutcome};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub locations: &'static [Location],
    pub shuttle_types: &'static [ShuttleType],
    pub ai_unavailable: Option<String>,
}

impl IndexTemplate {
    pub fn new(ai_unavailable: Option<&str>) -> Self {
        Self {
            locations: LOCATIONS,
            shuttle_types: SHUTTLE_TYPES,
            ai_unavailable: ai_unavailable.map(str::to_string),
        }
    }
}

/// A booking session at whatever step it has reached.
#[derive(Template)]
#[template(path = "session.html")]
pub struct SessionTemplate {
    pub session_id: String,
    pub step: String,
    pub searching: bool,
    pub has_searched: bool,
    pub results: Vec<OfferView>,
    pub selected: Option<OfferView>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub submission: Option<String>,
    pub travel_plan: Option<String>,
    pub travel_plan_error: Option<String>,
    pub ai_unavailable: Option<String>,
}

impl SessionTemplate {
    /// Build the page from a session snapshot.
    ///
    /// The AI banner only shows on a search that hasn't run yet.
    pub fn from_snapshot(snapshot: &Snapshot, ai_unavailable: Option<&str>) -> Self {
        let wf = &snapshot.workflow;
        let fresh = wf.step() == BookingStep::Search && wf.criteria().is_none();
        let passenger = wf.passenger();
        let submission = wf.last_submission().map(|outcome| match outcome {
            SubmissionOutcome::Accepted { .. } => "Booking received by the backend.".to_string(),
            SubmissionOutcome::Failed { message } => format!("Booking submission failed: {message}"),
        });

        Self {
            session_id: snapshot.id.to_string(),
            step: wf.step().to_string(),
            searching: wf.results_loading(),
            has_searched: wf.criteria().is_some(),
            results: wf.results().iter().map(OfferView::from_result).collect(),
            selected: wf.selected().map(OfferView::from_result),
            full_name: passenger.full_name.clone(),
            email: passenger.email.clone(),
            phone_number: passenger.phone_number.clone(),
            submission,
            travel_plan: wf.travel_plan().value.as_ref().map(|s| s.text.clone()),
            travel_plan_error: wf.travel_plan().error.clone(),
            ai_unavailable: ai_unavailable.filter(|_| fresh).map(str::to_string),
        }
    }

    pub fn is_search(&self) -> bool {
        self.step == BookingStep::Search.as_str()
    }

    pub fn is_confirmation(&self) -> bool {
        self.step == BookingStep::Confirmation.as_str()
    }

    pub fn is_booked(&self) -> bool {
        self.step == BookingStep::Booked.as_str()
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Offer view model for templates.
#[derive(Debug, Clone)]
pub struct OfferView {
    pub id: String,
    pub route: String,
    pub shuttle: String,
    pub mode: String,
    pub date: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
    pub passengers: u32,
}

impl OfferView {
    /// Create from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        let date = match result.return_date {
            Some(back) => format!("{} (return {})", result.journey_date, back),
            None => result.journey_date.to_string(),
        };
        Self {
            id: result.id.clone(),
            route: format!("{} to {}", result.from_name, result.to_name),
            shuttle: result.shuttle_type_name.clone(),
            mode: result.booking_type.to_string(),
            date,
            departure: result.departure_time.clone(),
            arrival: result.arrival_time.clone(),
            price: format!("₹{}", result.price),
            passengers: result.passengers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BookingMode;
    use crate::session::SessionId;
    use crate::search::SearchParams;
    use crate::workflow::{SubmissionPolicy, Workflow};
    use chrono::NaiveDate;

    fn result() -> SearchResult {
        SearchResult {
            id: "result-1-0".into(),
            from_id: "shimla".into(),
            to_id: "manali".into(),
            from_name: "Shimla".into(),
            to_name: "Manali".into(),
            shuttle_type_id: "muv".into(),
            shuttle_type_name: "MUV".into(),
            journey_date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            departure_time: "09:30".into(),
            arrival_time: "12:30".into(),
            price: 2100,
            passengers: 3,
            booking_type: BookingMode::Shared,
            return_date: None,
        }
    }

    #[test]
    fn offer_view_formats_fields() {
        let view = OfferView::from_result(&result());
        assert_eq!(view.route, "Shimla to Manali");
        assert_eq!(view.mode, "shared");
        assert_eq!(view.price, "₹2100");
        assert_eq!(view.date, "2025-10-02");

        let round_trip = SearchResult {
            return_date: NaiveDate::from_ymd_opt(2025, 10, 5),
            ..result()
        };
        assert_eq!(
            OfferView::from_result(&round_trip).date,
            "2025-10-02 (return 2025-10-05)"
        );
    }

    #[test]
    fn index_page_shows_ai_banner() {
        let html = IndexTemplate::new(Some("AI is off")).render().unwrap();
        assert!(html.contains("AI is off"));
        assert!(html.contains("Dharamshala"));
        assert!(html.contains("SUV"));

        let html = IndexTemplate::new(None).render().unwrap();
        assert!(!html.contains("ai-banner"));
    }

    #[test]
    fn index_page_offers_destination_ideas_beside_search() {
        let html = IndexTemplate::new(None).render().unwrap();
        let form = html.find("id=\"search-form\"").unwrap();
        let control = html.find("data-action=\"destinations\"").unwrap();
        assert!(control > form);
        assert!(html.contains("id=\"suggestion-list\""));
    }

    #[test]
    fn session_page_renders_search_step() {
        let snapshot = Snapshot {
            id: SessionId::generate(),
            workflow: Workflow::default(),
        };
        let page = SessionTemplate::from_snapshot(&snapshot, None);
        assert!(page.is_search());
        let html = page.render().unwrap();
        assert!(html.contains(snapshot.id.as_str()));
        assert!(html.contains("No search yet"));
        assert!(!html.contains("No shuttles found"));
    }

    #[test]
    fn ai_banner_only_before_first_search() {
        let mut workflow = Workflow::new(SubmissionPolicy::Optimistic);
        let fresh = Snapshot {
            id: SessionId::generate(),
            workflow: workflow.clone(),
        };
        let page = SessionTemplate::from_snapshot(&fresh, Some("AI is off"));
        assert!(page.render().unwrap().contains("AI is off"));

        let ticket = workflow.begin_search(SearchParams {
            leaving_from: "shimla".into(),
            going_to: "manali".into(),
            journey_date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            passengers: 3,
            shuttle_type: "muv".into(),
            booking_type: BookingMode::Shared,
            return_date: None,
        });
        workflow.complete_search(ticket, vec![result()]);
        let searched = Snapshot {
            id: fresh.id.clone(),
            workflow: workflow.clone(),
        };
        let page = SessionTemplate::from_snapshot(&searched, Some("AI is off"));
        assert_eq!(page.ai_unavailable, None);
        assert!(!page.render().unwrap().contains("ai-banner"));

        workflow.select("result-1-0").unwrap();
        let confirming = Snapshot {
            id: fresh.id,
            workflow,
        };
        let page = SessionTemplate::from_snapshot(&confirming, Some("AI is off"));
        assert!(page.is_confirmation());
        assert!(!page.render().unwrap().contains("AI is off"));
    }
}
