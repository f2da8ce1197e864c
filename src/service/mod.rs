pub mod analysis;
pub mod llm;

pub use analysis::{AnalysisBackend, AnalysisError, FeatureAnalysisService, GeminiBackend};
pub use llm::LlmClient;
