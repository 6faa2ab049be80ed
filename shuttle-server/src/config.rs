//! Startup configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::ai::AiConfig;
use crate::booking::BookingClientConfig;
use crate::service::DEFAULT_SEARCH_DELAY;
use crate::session::SessionConfig;
use crate::workflow::SubmissionPolicy;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub search_delay: Duration,
    pub submission_policy: SubmissionPolicy,
    pub session: SessionConfig,
    pub booking: BookingClientConfig,
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            search_delay: DEFAULT_SEARCH_DELAY,
            submission_policy: SubmissionPolicy::default(),
            session: SessionConfig::default(),
            booking: BookingClientConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset and empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(key) = get("API_KEY") {
            config.ai.api_key = Some(key);
        }
        if let Some(model) = get("AI_MODEL") {
            config.ai = config.ai.with_model(model);
        }
        if let Some(url) = get("AI_BASE_URL") {
            config.ai = config.ai.with_base_url(url);
        }
        if let Some(raw) = get("AI_TIMEOUT_SECS") {
            config.ai = config.ai.with_timeout(parse("AI_TIMEOUT_SECS", &raw)?);
        }

        if let Some(url) = get("BOOKING_API_URL") {
            config.booking.base_url = url;
        }
        if let Some(raw) = get("BOOKING_TIMEOUT_SECS") {
            config.booking = config
                .booking
                .with_timeout(parse("BOOKING_TIMEOUT_SECS", &raw)?);
        }
        if let Some(raw) = get("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", &raw)?;
        }
        if let Some(raw) = get("SEARCH_DELAY_MS") {
            config.search_delay = Duration::from_millis(parse("SEARCH_DELAY_MS", &raw)?);
        }
        if let Some(raw) = get("SUBMISSION_POLICY") {
            config.submission_policy = parse("SUBMISSION_POLICY", &raw)?;
        }
        if let Some(raw) = get("SESSION_IDLE_SECS") {
            let secs: u64 = parse("SESSION_IDLE_SECS", &raw)?;
            if secs == 0 {
                return Err(ConfigError {
                    var: "SESSION_IDLE_SECS",
                    value: raw,
                    reason: "must be greater than zero".into(),
                });
            }
            config.session.idle_timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = dir;
        }

        Ok(config)
    }

    /// Set the simulated search latency.
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Set the submission policy for new sessions.
    pub fn with_submission_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.submission_policy = policy;
        self
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
