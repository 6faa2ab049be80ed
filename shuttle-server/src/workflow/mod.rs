//! Booking workflow state machine.
//!
//! One [`Workflow`] holds everything a single user's booking session knows:
//! which step is active, the last search and its offers, the chosen offer,
//! passenger details, and the state of both AI features.
//!
//! Transitions are plain methods with no I/O. Anything asynchronous is split
//! into a `begin_*` call that hands out a ticket and a `complete_*` call that
//! takes it back. Every reset bumps the generation of the flows it abandons,
//! so a completion that arrives after a reset is recognised as stale and
//! dropped instead of being applied to a workflow that has moved on.

mod error;
mod machine;
mod state;
mod ticket;

pub use error::WorkflowError;
pub use machine::Workflow;
pub use state::{
    AiRequestState, BookingStep, InvalidSubmissionPolicy, SubmissionOutcome, SubmissionPolicy,
};
pub use ticket::{BookingTicket, DestinationTicket, SearchTicket, TravelPlanTicket};

#[cfg(test)]
mod proptests;
