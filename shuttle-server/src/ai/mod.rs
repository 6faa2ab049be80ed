//! AI travel suggestions.
//!
//! Two independent features backed by a text-generation service:
//! destination ideas before a search, and things to do after a booking.
//! Neither is ever allowed to hold up or fail the booking flow.

mod config;
mod error;
mod gemini;
mod prompts;
mod suggestions;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

pub use config::{AiConfig, DEFAULT_AI_BASE_URL, DEFAULT_MODEL};
pub use error::AiError;
pub use gemini::GeminiClient;
pub use prompts::{destination_prompt, travel_plan_prompt};
pub use suggestions::{
    AiTravelSuggestion, MAX_DESTINATION_SUGGESTIONS, parse_destinations, suggest_destinations,
    suggest_travel_plan,
};

/// Shown when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "API Key is missing. AI features are unavailable. Please ensure API_KEY is set in your environment.";

/// Shown when a key is configured but the client could not be built.
pub const INIT_FAILED_MESSAGE: &str = "Failed to initialize AI services. Please check your API key.";

/// Shown when AI is unavailable without a more specific reason.
pub const NOT_INITIALIZED_MESSAGE: &str = "AI service not initialized.";

/// Shown when a destination suggestion request fails.
pub const DESTINATION_FAILED_MESSAGE: &str = "Sorry, couldn't fetch AI suggestions at the moment.";

/// Shown when a travel plan request fails.
pub const TRAVEL_PLAN_FAILED_MESSAGE: &str = "Sorry, couldn't fetch AI travel ideas right now.";

/// A text-completion backend: prompt in, plain text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Whether AI features can be used, decided once at startup.
#[derive(Clone)]
pub enum AiAvailability {
    Ready(Arc<dyn TextGenerator>),
    Disabled(String),
}

impl AiAvailability {
    /// Build the Gemini client if a key is configured.
    ///
    /// Never fails: a missing key or a client that can't be built disables
    /// AI with a user-facing reason.
    pub fn from_config(config: &AiConfig) -> Self {
        if !config.has_api_key() {
            warn!("API_KEY is not set; AI features will be disabled");
            return AiAvailability::Disabled(MISSING_KEY_MESSAGE.to_string());
        }

        match GeminiClient::new(config) {
            Ok(client) => AiAvailability::Ready(Arc::new(client)),
            Err(e) => {
                error!(error = %e, "failed to initialize AI client");
                AiAvailability::Disabled(INIT_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// The generator, or the reason there isn't one.
    pub fn generator(&self) -> Result<Arc<dyn TextGenerator>, String> {
        match self {
            AiAvailability::Ready(generator) => Ok(Arc::clone(generator)),
            AiAvailability::Disabled(reason) if !reason.is_empty() => Err(reason.clone()),
            AiAvailability::Disabled(_) => Err(NOT_INITIALIZED_MESSAGE.to_string()),
        }
    }

    /// Why AI is disabled, if it is.
    pub fn disabled_reason(&self) -> Option<&str> {
        match self {
            AiAvailability::Ready(_) => None,
            AiAvailability::Disabled(reason) => Some(reason),
        }
    }
}

impl fmt::Debug for AiAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiAvailability::Ready(_) => write!(f, "AiAvailability::Ready"),
            AiAvailability::Disabled(reason) => write!(f, "AiAvailability::Disabled({reason:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_disables_ai() {
        let ai = AiAvailability::from_config(&AiConfig::default());
        assert_eq!(ai.disabled_reason(), Some(MISSING_KEY_MESSAGE));
        assert_eq!(ai.generator().err().as_deref(), Some(MISSING_KEY_MESSAGE));
    }

    #[test]
    fn blank_key_disables_ai() {
        let ai = AiAvailability::from_config(&AiConfig::new("   "));
        assert_eq!(ai.disabled_reason(), Some(MISSING_KEY_MESSAGE));
    }

    #[test]
    fn unusable_key_disables_ai_with_init_message() {
        // Header values can't carry newlines
        let ai = AiAvailability::from_config(&AiConfig::new("abc\ndef"));
        assert_eq!(ai.disabled_reason(), Some(INIT_FAILED_MESSAGE));
    }

    #[test]
    fn key_enables_ai() {
        let ai = AiAvailability::from_config(&AiConfig::new("test-key"));
        assert!(ai.disabled_reason().is_none());
        assert!(ai.generator().is_ok());
    }

    #[test]
    fn empty_reason_falls_back() {
        let ai = AiAvailability::Disabled(String::new());
        assert_eq!(ai.generator().err().as_deref(), Some(NOT_INITIALIZED_MESSAGE));
    }
}
