//! Feature risk analysis service using LLM
//!
//! Sends a free-text feature description together with the fixed instruction
//! set to the Gemini backend and turns the markdown response into a display
//! report plus structured risk items.

use std::sync::Arc;

use async_trait::async_trait;
use rig::completion::Prompt;

use crate::model::{AnalysisRequest, AnalysisResult};
use crate::service::analysis::extraction::extract_report;
use crate::service::analysis::prompts::ANALYSIS_SYSTEM_PROMPT;
use crate::service::llm::LlmClient;

/// Environment variable for the analysis model (defaults if not set)
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for feature risk analysis
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Lower temperature for more analytical/consistent results
const DEFAULT_TEMPERATURE: f64 = 0.4;

/// Placeholder report when the backend returns an empty payload
const NO_RESPONSE_PLACEHOLDER: &str = "No response generated.";

pub mod aggregation;
pub mod error;
pub mod extraction;
pub mod prompts;

pub use error::AnalysisError;

/// Backend issuing one generation request per analysis.
///
/// `analyze` consults `is_configured` before building any request, so a
/// missing credential never reaches the network.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Whether a backend credential is available
    fn is_configured(&self) -> bool;

    /// Issue a single generation request and return the raw response text
    async fn generate(&self, request: &AnalysisRequest) -> Result<String, AnalysisError>;
}

/// Real backend over the Gemini API
pub struct GeminiBackend {
    llm_client: LlmClient,
    model: String,
}

impl GeminiBackend {
    /// Creates a new backend over a shared LLM client.
    ///
    /// Optionally uses the ANALYSIS_MODEL env var (defaults to
    /// gemini-3-flash-preview).
    pub fn new(llm_client: LlmClient) -> Self {
        let model = std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Feature analysis backend initialized"
        );

        Self { llm_client, model }
    }
}

#[async_trait]
impl AnalysisBackend for GeminiBackend {
    fn is_configured(&self) -> bool {
        // LlmClient::new rejects missing credentials at construction time
        true
    }

    async fn generate(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let agent = self
            .llm_client
            .gemini_client()
            .agent(&self.model)
            .preamble(request.system_instruction)
            .temperature(request.temperature)
            .build();

        agent
            .prompt(request.feature_description.as_str())
            .await
            .map_err(|e| AnalysisError::Backend(e.to_string()))
    }
}

/// Service for analyzing feature descriptions for cybersecurity and
/// compliance risks
pub struct FeatureAnalysisService {
    backend: Arc<dyn AnalysisBackend>,
}

impl FeatureAnalysisService {
    /// Creates a new analysis service over an explicitly constructed backend
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    /// Creates a service backed by Gemini, with the credential taken from the
    /// environment. Fails with a configuration error when the key is absent.
    pub fn from_env() -> Result<Self, AnalysisError> {
        let llm_client = LlmClient::from_env()?;
        Ok(Self::new(Arc::new(GeminiBackend::new(llm_client))))
    }

    /// Analyze a feature description.
    ///
    /// Issues exactly one backend request with no retry, no streaming, and no
    /// cancellation; the caller awaits the whole result. A missing or
    /// malformed risk summary block in the response is not a failure: the
    /// analysis still succeeds with an empty risk list.
    pub async fn analyze(&self, feature_description: &str) -> Result<AnalysisResult, AnalysisError> {
        if feature_description.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        // Checked before any request is built or sent
        if !self.backend.is_configured() {
            return Err(AnalysisError::Configuration(
                "No API key is configured for the analysis backend.".to_string(),
            ));
        }

        let request = AnalysisRequest {
            feature_description: feature_description.to_string(),
            system_instruction: ANALYSIS_SYSTEM_PROMPT,
            temperature: DEFAULT_TEMPERATURE,
        };

        let start_time = std::time::Instant::now();

        tracing::debug!(
            description_length = request.feature_description.len(),
            "Initiating Gemini API call for feature analysis"
        );

        let raw = match self.backend.generate(&request).await {
            Ok(text) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    elapsed_ms = elapsed.as_millis(),
                    response_length = text.len(),
                    "Gemini API call for feature analysis completed successfully"
                );
                text
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "Gemini API call for feature analysis failed"
                );
                return Err(e);
            }
        };

        let raw = if raw.is_empty() {
            NO_RESPONSE_PLACEHOLDER.to_string()
        } else {
            raw
        };

        let extracted = extract_report(&raw);

        tracing::debug!(
            risks = extracted.risks.len(),
            report_length = extracted.report_text.len(),
            "Converted raw response to analysis result"
        );

        Ok(AnalysisResult {
            report_text: extracted.report_text,
            risks: extracted.risks,
        })
    }
}
