//! Booking submission.
//!
//! Passenger details are validated locally, then the selected offer and the
//! passenger are sent to the booking backend in a single JSON POST. What
//! happens to the workflow when that call fails is decided by
//! [`SubmissionPolicy`](crate::workflow::SubmissionPolicy), not here.

mod client;
mod error;
mod passenger;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

pub use client::{BOOKINGS_PATH, BookingClient, BookingClientConfig, DEFAULT_ERROR_DETAIL};
pub use error::BookingError;
pub use passenger::{PassengerDetails, PassengerError};

/// Body of a booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub shuttle_details: SearchResult,
    pub passenger_info: PassengerDetails,
}

/// Somewhere bookings can be sent.
///
/// Returns the backend's JSON acknowledgement on success.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn submit(&self, payload: &BookingPayload) -> Result<serde_json::Value, BookingError>;
}
