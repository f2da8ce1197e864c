//! Structured risk summary models
//!
//! One `RiskItem` corresponds to one row of the risk prioritization table the
//! model is instructed to emit as a fenced JSON block.

use serde::{Deserialize, Serialize};

/// One row of the structured risk summary.
///
/// Field names and enum variants match the wire format the instruction
/// template mandates (`{"area": ..., "severity": "High", ...}`). Extra fields
/// in the JSON are tolerated; unknown enum values fail the parse, which the
/// extraction step absorbs as a recoverable outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    /// Analysis framework category the risk belongs to (e.g. "Communication Security")
    pub area: String,
    pub severity: Severity,
    pub likelihood: Likelihood,
    pub priority: Priority,
    /// Recommended control or mitigation
    pub action: String,
}

/// Severity of an identified risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Likelihood of the risk materializing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Likelihood {
    High,
    Medium,
    Low,
}

/// Remediation priority derived from severity and likelihood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}
