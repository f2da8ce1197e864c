//! Error types for feature risk analysis

use thiserror::Error;

/// Error type for the analysis client.
///
/// A missing or malformed risk summary block is not represented here: it is
/// absorbed inside extraction, and the analysis still succeeds with an empty
/// risk list.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No backend credential is configured. Fatal to the operation, surfaced
    /// verbatim, never retried.
    #[error("{0}")]
    Configuration(String),

    /// The model call itself failed (network, auth, quota). Surfaced as-is,
    /// no automatic retry, no partial result.
    #[error("Analysis request failed: {0}")]
    Backend(String),

    /// The feature description was blank
    #[error("Feature description must not be empty")]
    EmptyInput,
}
