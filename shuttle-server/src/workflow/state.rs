//! Workflow state values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which screen is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Search,
    Confirmation,
    Booked,
}

impl BookingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Search => "search",
            BookingStep::Confirmation => "confirmation",
            BookingStep::Booked => "booked",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loading/result/error slot for one AI feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequestState<T> {
    pub loading: bool,
    pub value: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for AiRequestState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            value: None,
            error: None,
        }
    }
}

impl<T> AiRequestState<T> {
    pub(super) fn start(&mut self) {
        self.loading = true;
        self.value = None;
        self.error = None;
    }

    pub(super) fn finish(&mut self, outcome: Result<T, String>) {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(message) => {
                self.value = None;
                self.error = Some(message);
            }
        }
    }

    pub(super) fn refuse(&mut self, reason: String) {
        self.error = Some(reason);
    }

    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What came back from the last booking submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    /// Backend accepted; its acknowledgement body
    Accepted { response: serde_json::Value },
    /// Submission failed; user-facing description
    Failed { message: String },
}

/// What a failed submission does to the workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Advance to `booked` whatever the backend says; failures are logged
    /// and recorded only.
    #[default]
    Optimistic,
    /// Advance only once the backend has accepted the booking.
    Confirmed,
}

/// Error returned when parsing an unknown submission policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown submission policy {0:?} (expected \"optimistic\" or \"confirmed\")")]
pub struct InvalidSubmissionPolicy(String);

impl FromStr for SubmissionPolicy {
    type Err = InvalidSubmissionPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(SubmissionPolicy::Optimistic),
            "confirmed" => Ok(SubmissionPolicy::Confirmed),
            _ => Err(InvalidSubmissionPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wire_names() {
        assert_eq!(
            serde_json::to_value(BookingStep::Confirmation).unwrap(),
            "confirmation"
        );
        assert_eq!(BookingStep::default(), BookingStep::Search);
        assert_eq!(BookingStep::Booked.to_string(), "booked");
    }

    #[test]
    fn ai_slot_lifecycle() {
        let mut slot: AiRequestState<Vec<String>> = AiRequestState::default();
        slot.start();
        assert!(slot.loading);

        slot.finish(Ok(vec!["Leh".into()]));
        assert!(!slot.loading);
        assert_eq!(slot.value.as_deref(), Some(&["Leh".to_string()][..]));

        slot.start();
        slot.finish(Err("nope".into()));
        assert_eq!(slot.value, None);
        assert_eq!(slot.error.as_deref(), Some("nope"));

        slot.clear();
        assert_eq!(slot, AiRequestState::default());
    }

    #[test]
    fn parse_policy() {
        assert_eq!("optimistic".parse(), Ok(SubmissionPolicy::Optimistic));
        assert_eq!(" Confirmed ".parse(), Ok(SubmissionPolicy::Confirmed));
        assert!("eventually".parse::<SubmissionPolicy>().is_err());
        assert_eq!(SubmissionPolicy::default(), SubmissionPolicy::Optimistic);
    }

    #[test]
    fn outcome_wire_format() {
        let ok = SubmissionOutcome::Accepted {
            response: serde_json::json!({"bookingId": "HS-9"}),
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["response"]["bookingId"], "HS-9");

        let failed = SubmissionOutcome::Failed {
            message: "Backend error: 500 - Internal Server Error".into(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
    }
}
