pub mod analysis;
pub mod risk;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use risk::{Likelihood, Priority, RiskItem, Severity};
