//! Property tests: random operation sequences never break the workflow invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::json;

use super::*;
use crate::booking::PassengerDetails;
use crate::search::{BookingMode, SearchParams, SearchResult};

#[derive(Debug, Clone)]
enum Op {
    Search { offers: usize },
    CompleteLatestSearch,
    CompleteStaleSearch,
    Select { idx: usize },
    SelectBogus,
    EnterPassenger { valid: bool },
    Confirm,
    Settle { ok: bool },
    Cancel,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..=3).prop_map(|offers| Op::Search { offers }),
        Just(Op::CompleteLatestSearch),
        Just(Op::CompleteStaleSearch),
        (0usize..3).prop_map(|idx| Op::Select { idx }),
        Just(Op::SelectBogus),
        any::<bool>().prop_map(|valid| Op::EnterPassenger { valid }),
        Just(Op::Confirm),
        any::<bool>().prop_map(|ok| Op::Settle { ok }),
        Just(Op::Cancel),
        Just(Op::Reset),
    ]
}

fn params() -> SearchParams {
    SearchParams {
        leaving_from: "kasol".into(),
        going_to: "manali".into(),
        journey_date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
        passengers: 1,
        shuttle_type: "muv".into(),
        booking_type: BookingMode::Shared,
        return_date: None,
    }
}

fn offers(search_no: usize, n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| SearchResult {
            id: format!("result-{search_no}-{i}"),
            from_id: "kasol".into(),
            to_id: "manali".into(),
            from_name: "Kasol".into(),
            to_name: "Manali".into(),
            shuttle_type_id: "muv".into(),
            shuttle_type_name: "MUV".into(),
            journey_date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            departure_time: "09:00".into(),
            arrival_time: "11:30".into(),
            price: 750,
            passengers: 1,
            booking_type: BookingMode::Shared,
            return_date: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn invariants_hold(ops in prop::collection::vec(op(), 1..40), confirmed in any::<bool>()) {
        let policy = if confirmed { SubmissionPolicy::Confirmed } else { SubmissionPolicy::Optimistic };
        let mut wf = Workflow::new(policy);

        let mut search_no = 0usize;
        let mut pending: Vec<(SearchTicket, usize)> = Vec::new();
        let mut booking: Option<BookingTicket> = None;

        for op in ops {
            match op {
                Op::Search { offers } => {
                    search_no += 1;
                    pending.push((wf.begin_search(params()), offers));
                }
                Op::CompleteLatestSearch => {
                    if let Some((ticket, n)) = pending.pop() {
                        wf.complete_search(ticket, offers(search_no, n));
                    }
                }
                Op::CompleteStaleSearch => {
                    if pending.len() > 1 {
                        let (ticket, n) = pending.remove(0);
                        prop_assert!(!wf.complete_search(ticket, offers(0, n)));
                    }
                }
                Op::Select { idx } => {
                    let id = wf.results().get(idx).map(|r| r.id.clone());
                    if let Some(id) = id {
                        let _ = wf.select(&id);
                    }
                }
                Op::SelectBogus => {
                    let step = wf.step();
                    prop_assert!(wf.select("not-a-result").is_err());
                    prop_assert_eq!(wf.step(), step);
                }
                Op::EnterPassenger { valid } => {
                    let details = if valid {
                        PassengerDetails::new("Dolma", "dolma@example.net", "1234567")
                    } else {
                        PassengerDetails::new("Dolma", "dolma@", "12")
                    };
                    let _ = wf.update_passenger(details);
                }
                Op::Confirm => {
                    if let Ok(ticket) = wf.begin_confirm() {
                        booking = Some(ticket);
                    }
                }
                Op::Settle { ok } => {
                    if let Some(ticket) = booking.take() {
                        let outcome = if ok { Ok(json!({})) } else { Err("down".to_string()) };
                        wf.complete_confirm(ticket, outcome);
                    }
                }
                Op::Cancel => {
                    let _ = wf.cancel();
                }
                Op::Reset => wf.start_new_search(),
            }

            // A non-search step always has a selection
            if wf.step() != BookingStep::Search {
                prop_assert!(wf.selected().is_some());
            }

            // The selection came from the current offers while confirming
            if wf.step() == BookingStep::Confirmation {
                let selected = wf.selected().map(|s| s.id.clone()).unwrap_or_default();
                prop_assert!(wf.results().iter().any(|r| r.id == selected));
            }

            // Submitting only ever happens on the confirmation step
            if wf.submitting() {
                prop_assert_eq!(wf.step(), BookingStep::Confirmation);
            }
        }
    }
}
