//! Booking submission error types.

/// Errors from submitting a booking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Request never completed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    /// Backend answered success but the body was not JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be configured
    #[error("invalid booking client configuration: {0}")]
    Config(String),
}
