//! AI client error types.

/// Errors from the text-generation service.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response parsed but held no text
    #[error("empty completion")]
    EmptyCompletion,

    /// Client could not be built from the configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AiError::Api {
            status: 403,
            message: "API key not valid".into(),
        };
        assert_eq!(err.to_string(), "API error 403: API key not valid");

        assert_eq!(AiError::EmptyCompletion.to_string(), "empty completion");

        let err = AiError::NotConfigured("missing API key".into());
        assert_eq!(err.to_string(), "not configured: missing API key");
    }
}
