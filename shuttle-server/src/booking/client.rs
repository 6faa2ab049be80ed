//! HTTP client for the booking backend.

use serde_json::Value;
use tracing::{debug, info};

use super::error::BookingError;
use super::{BookingBackend, BookingPayload};

/// Path of the submission endpoint, relative to the backend origin.
pub const BOOKINGS_PATH: &str = "/api/bookings";

/// Used when the backend gives neither a JSON message nor a status reason.
pub const DEFAULT_ERROR_DETAIL: &str = "Error details not available or not in JSON format.";

/// Default backend origin: the service's own listen address.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Configuration for the booking client.
#[derive(Debug, Clone)]
pub struct BookingClientConfig {
    /// Backend origin, without a trailing path
    pub base_url: String,
    /// Optional request timeout in seconds; none by default
    pub timeout_secs: Option<u64>,
}

impl BookingClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for BookingClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client that POSTs bookings to the backend.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BookingClient {
    /// Create a new booking client.
    pub fn new(config: BookingClientConfig) -> Result<Self, BookingError> {
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BookingError::Config(format!(
                "backend URL must be http(s): {}",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: format!("{base}{BOOKINGS_PATH}"),
        })
    }

    /// Full URL bookings are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl BookingBackend for BookingClient {
    async fn submit(&self, payload: &BookingPayload) -> Result<Value, BookingError> {
        debug!(endpoint = %self.endpoint, "sending booking to backend");

        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = reason_phrase(&response);
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Backend {
                status: status.as_u16(),
                message: error_detail(reason.as_deref(), &body),
            });
        }

        let body = response.text().await?;
        let ack: Value = serde_json::from_str(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
        })?;

        info!(status = status.as_u16(), "booking accepted by backend");
        Ok(ack)
    }
}

/// The status line's reason phrase, as the backend sent it.
///
/// hyper only records the phrase when it differs from the canonical one.
fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .map(str::to_string)
}

/// Pick the most helpful description of a failed submission.
///
/// A JSON body is trusted to speak for itself: its `message` string if it
/// has a non-empty one, the generic text otherwise. Only a body that isn't
/// JSON falls back to the status reason phrase.
fn error_detail(reason: Option<&str>, body: &str) -> String {
    let detail = match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        Err(_) => reason
            .filter(|r| !r.trim().is_empty())
            .map(str::to_string),
    };
    detail.unwrap_or_else(|| DEFAULT_ERROR_DETAIL.to_string())
}
