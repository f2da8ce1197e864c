//! Shared LLM client and interaction utilities
//!
//! Provides a common interface for Gemini API interactions used by the
//! analysis service.

use rig::providers::gemini;

use crate::service::analysis::AnalysisError;

/// Environment variable holding the Gemini API key
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: gemini::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key.
    ///
    /// The credential is checked here, at construction time, so a missing key
    /// surfaces before any request is ever issued.
    pub fn new(api_key: &str) -> Result<Self, AnalysisError> {
        if api_key.trim().is_empty() {
            return Err(AnalysisError::Configuration(format!(
                "API key is missing. Please ensure {} is set.",
                ENV_GEMINI_API_KEY
            )));
        }

        let client = gemini::Client::new(api_key);

        Ok(Self { client })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = std::env::var(ENV_GEMINI_API_KEY).unwrap_or_default();
        Self::new(&api_key)
    }

    /// Get a reference to the underlying Gemini client
    /// Use this to build agents with custom configuration
    pub fn gemini_client(&self) -> &gemini::Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_a_configuration_error() {
        let err = LlmClient::new("").err().expect("empty key should be rejected");
        assert!(matches!(err, AnalysisError::Configuration(_)));
        assert!(err.to_string().contains(ENV_GEMINI_API_KEY));
    }

    #[test]
    fn non_empty_api_key_constructs_a_client() {
        assert!(LlmClient::new("test-key").is_ok());
    }

    #[test]
    fn whitespace_api_key_is_rejected() {
        let err = LlmClient::new("   ")
            .err()
            .expect("whitespace key should be rejected");
        assert!(matches!(err, AnalysisError::Configuration(_)));
    }
}
