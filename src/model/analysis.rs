//! Request and result models for a single feature analysis

use serde::Serialize;

use crate::model::risk::RiskItem;

/// A single analysis request assembled from user input and the fixed
/// instruction set. Constructed per call and discarded after sending.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Free-text feature description supplied by the user
    pub feature_description: String,
    /// Fixed instruction template sent as the system-level message
    pub system_instruction: &'static str,
    /// Generation temperature; kept low for analytical consistency
    pub temperature: f64,
}

/// Outcome of a successful analysis.
///
/// `report_text` is the markdown report with the machine-readable JSON block
/// and its header stripped; `risks` preserves the order the model returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub report_text: String,
    pub risks: Vec<RiskItem>,
}
