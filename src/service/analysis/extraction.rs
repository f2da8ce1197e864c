//! Extraction of the structured risk summary from a raw model response
//!
//! The instruction template mandates a markdown report terminated by a fenced
//! JSON block holding the risk prioritization table. This module locates that
//! block with a deterministic two-phase parse: scan for the fence markers
//! first, then attempt a structured parse of the captured span. Parse failure
//! is a recoverable outcome, never an error for the caller.

use std::ops::Range;

use crate::model::RiskItem;

/// Marker opening the machine-readable block
const FENCE_OPEN: &str = "```json";
/// Marker closing the block
const FENCE_CLOSE: &str = "```";
/// Header line the instruction template places above the block
const SUMMARY_HEADER: &str = "# Risk Prioritization Summary JSON";

/// A JSON fence located within a raw model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFence<'a> {
    /// Byte range of the entire fence, opening marker through closing marker
    pub span: Range<usize>,
    /// Text between the markers, surrounding whitespace trimmed
    pub inner: &'a str,
}

/// Report text and structured risks recovered from a raw response
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedReport {
    /// Markdown for display, with the fence and its header stripped when the
    /// block parsed cleanly
    pub report_text: String,
    /// Parsed risk items, in the order the model returned them
    pub risks: Vec<RiskItem>,
}

/// Locate the first JSON fence in the raw text.
///
/// Only the first opening marker is considered, and an opener without a
/// matching closer counts as no fence at all. Later fences are ignored.
pub fn find_json_fence(raw: &str) -> Option<JsonFence<'_>> {
    let open = raw.find(FENCE_OPEN)?;
    let inner_start = open + FENCE_OPEN.len();
    let close = raw[inner_start..].find(FENCE_CLOSE)?;
    let inner_end = inner_start + close;
    let span_end = inner_end + FENCE_CLOSE.len();

    Some(JsonFence {
        span: open..span_end,
        inner: raw[inner_start..inner_end].trim(),
    })
}

/// Split a raw model response into display markdown and structured risks.
///
/// No fence: the report is the input unchanged and the risk list is empty.
/// A fence that parses cleanly is removed from the report along with the
/// summary header line, and the remainder is trimmed. A fence that fails to
/// parse is logged and left in place, keeping the raw text fully intact.
pub fn extract_report(raw: &str) -> ExtractedReport {
    let Some(fence) = find_json_fence(raw) else {
        return ExtractedReport {
            report_text: raw.to_string(),
            risks: Vec::new(),
        };
    };

    match serde_json::from_str::<Vec<RiskItem>>(fence.inner) {
        Ok(risks) => {
            let mut report = String::with_capacity(raw.len());
            report.push_str(&raw[..fence.span.start]);
            report.push_str(&raw[fence.span.end..]);

            let report = report.replacen(SUMMARY_HEADER, "", 1);

            tracing::debug!(
                risks = risks.len(),
                "Parsed risk summary block from model response"
            );

            ExtractedReport {
                report_text: report.trim().to_string(),
                risks,
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to parse risk summary block, keeping raw report"
            );
            ExtractedReport {
                report_text: raw.to_string(),
                risks: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Likelihood, Priority, Severity};

    const BLE_RISK_JSON: &str = r#"[{"area":"BLE","severity":"High","likelihood":"Medium","priority":"High","action":"Encrypt"}]"#;

    fn response_with_fence() -> String {
        format!(
            "# Feature Summary\n...\n# Risk Prioritization Summary JSON\n```json\n{}\n```",
            BLE_RISK_JSON
        )
    }

    #[test]
    fn no_fence_leaves_text_unchanged() {
        let raw = "# Feature Summary\nNothing structured here.";
        let extracted = extract_report(raw);

        assert!(extracted.risks.is_empty());
        assert_eq!(extracted.report_text, raw);
    }

    #[test]
    fn well_formed_fence_is_parsed_and_stripped() {
        let extracted = extract_report(&response_with_fence());

        assert_eq!(extracted.risks.len(), 1);
        let risk = &extracted.risks[0];
        assert_eq!(risk.area, "BLE");
        assert_eq!(risk.severity, Severity::High);
        assert_eq!(risk.likelihood, Likelihood::Medium);
        assert_eq!(risk.priority, Priority::High);
        assert_eq!(risk.action, "Encrypt");

        assert_eq!(extracted.report_text, "# Feature Summary\n...");
    }

    #[test]
    fn risks_preserve_source_order() {
        let raw = concat!(
            "Report body\n```json\n[",
            r#"{"area":"Storage","severity":"Low","likelihood":"Low","priority":"Low","action":"Review"},"#,
            r#"{"area":"Auth","severity":"Critical","likelihood":"High","priority":"Critical","action":"Harden"}"#,
            "]\n```"
        );
        let extracted = extract_report(raw);

        assert_eq!(extracted.risks.len(), 2);
        assert_eq!(extracted.risks[0].area, "Storage");
        assert_eq!(extracted.risks[1].area, "Auth");
    }

    #[test]
    fn invalid_json_is_absorbed_and_raw_text_kept() {
        let raw = "# Report\n# Risk Prioritization Summary JSON\n```json\n[{not json\n```";
        let extracted = extract_report(raw);

        assert!(extracted.risks.is_empty());
        // Open question resolved as "leave intact": neither fence nor header
        // is stripped when the block fails to parse.
        assert_eq!(extracted.report_text, raw);
    }

    #[test]
    fn shape_mismatch_is_treated_as_parse_failure() {
        let raw = "# Report\n```json\n[\"just\", \"strings\"]\n```";
        let extracted = extract_report(raw);

        assert!(extracted.risks.is_empty());
        assert_eq!(extracted.report_text, raw);
    }

    #[test]
    fn only_the_first_fence_is_considered() {
        let raw = format!(
            "Intro\n```json\nnot valid json\n```\nMore text\n```json\n{}\n```",
            BLE_RISK_JSON
        );
        let extracted = extract_report(&raw);

        // First fence fails to parse; the second is never inspected.
        assert!(extracted.risks.is_empty());
        assert_eq!(extracted.report_text, raw);
    }

    #[test]
    fn unclosed_fence_counts_as_no_fence() {
        let raw = "# Report\n```json\n[{\"area\":\"BLE\"";
        assert!(find_json_fence(raw).is_none());

        let extracted = extract_report(raw);
        assert!(extracted.risks.is_empty());
        assert_eq!(extracted.report_text, raw);
    }

    #[test]
    fn fence_without_header_is_still_stripped() {
        let raw = format!("Body text\n```json\n{}\n```", BLE_RISK_JSON);
        let extracted = extract_report(&raw);

        assert_eq!(extracted.risks.len(), 1);
        assert_eq!(extracted.report_text, "Body text");
    }

    #[test]
    fn empty_risk_array_parses_cleanly() {
        let raw = "Body\n# Risk Prioritization Summary JSON\n```json\n[]\n```";
        let extracted = extract_report(raw);

        assert!(extracted.risks.is_empty());
        assert_eq!(extracted.report_text, "Body");
    }

    #[test]
    fn extra_fields_on_risk_objects_are_tolerated() {
        let raw = concat!(
            "Body\n```json\n[",
            r#"{"area":"BLE","severity":"High","likelihood":"Medium","priority":"High","action":"Encrypt","note":"extra"}"#,
            "]\n```"
        );
        let extracted = extract_report(raw);

        assert_eq!(extracted.risks.len(), 1);
        assert_eq!(extracted.report_text, "Body");
    }

    #[test]
    fn fence_span_covers_both_markers() {
        let raw = "abc```json\n[]\n```def";
        let fence = find_json_fence(raw).unwrap();

        assert_eq!(&raw[fence.span.clone()], "```json\n[]\n```");
        assert_eq!(fence.inner, "[]");
    }
}
