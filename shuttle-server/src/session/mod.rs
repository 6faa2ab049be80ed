//! Booking sessions.
//!
//! Each session owns one [`Workflow`](crate::workflow::Workflow). Sessions
//! live in a moka cache with time-to-idle expiry, so abandoned sessions
//! disappear without any explicit cleanup.

mod id;
mod store;

pub use id::{InvalidSessionId, SessionId};
pub use store::{SessionConfig, SessionError, SessionStore, SharedWorkflow};
