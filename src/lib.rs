//! Cybersecurity and compliance risk analysis for a Bluetooth-connected
//! hearing-aid companion app.
//!
//! Takes a free-text feature description, sends it with a fixed instruction
//! set to the Gemini API, and turns the markdown response into a display
//! report plus a structured, prioritized risk list.

pub mod model;
pub mod service;

pub use model::{AnalysisResult, Likelihood, Priority, RiskItem, Severity};
pub use service::analysis::aggregation::{count_by_priority, PriorityCount};
pub use service::{AnalysisBackend, AnalysisError, FeatureAnalysisService, GeminiBackend, LlmClient};
