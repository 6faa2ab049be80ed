//! Workflow transition errors.

use crate::booking::PassengerError;
use crate::search::SearchError;

use super::state::BookingStep;

/// Reasons a transition was refused. The workflow is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// Action not available in the current step
    #[error("cannot {action} in the {step} step")]
    InvalidStep {
        action: &'static str,
        step: BookingStep,
    },

    /// Selected result is not in the latest result set
    #[error("no result {0} in the current search results")]
    UnknownResult(String),

    /// A confirmation-step action ran without a selected shuttle
    #[error("no shuttle selected")]
    NoSelection,

    /// Confirm pressed again before the previous submission finished
    #[error("a booking submission is already in progress")]
    SubmissionInFlight,

    /// Location id not in the catalog
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error(transparent)]
    Passenger(#[from] PassengerError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
