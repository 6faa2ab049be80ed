//! Tickets handed out by `begin_*` transitions.
//!
//! A ticket records the generation of its flow at the time it was issued.
//! Completing with a ticket from an older generation is a no-op.

use crate::booking::BookingPayload;
use crate::search::{SearchParams, SearchResult};

/// An in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub(super) generation: u64,
    pub params: SearchParams,
}

/// An in-flight booking submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTicket {
    pub(super) generation: u64,
    pub payload: BookingPayload,
}

/// An in-flight destination suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTicket {
    pub(super) generation: u64,
    pub origin_name: String,
}

/// An in-flight travel plan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPlanTicket {
    pub(super) generation: u64,
    pub booked: SearchResult,
}
