//! AI client configuration.

/// Default model for both suggestion features.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Default Generative Language API root.
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the text-generation client.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key; AI is disabled without one
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API root (defaults to production)
    pub base_url: String,
    /// Optional request timeout in seconds; none by default
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Create a config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Set a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Whether a non-blank key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_AI_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_AI_BASE_URL);
        assert_eq!(config.timeout_secs, None);
        assert!(!config.has_api_key());
    }

    #[test]
    fn config_builder() {
        let config = AiConfig::new("key")
            .with_model("gemini-test")
            .with_base_url("http://localhost:9000")
            .with_timeout(20);

        assert!(config.has_api_key());
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, Some(20));
    }
}
