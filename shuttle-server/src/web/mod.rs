//! Web layer for the shuttle booking service.
//!
//! JSON endpoints for driving a booking session, plus server-rendered
//! pages for browsers.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
