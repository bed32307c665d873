//! Benefit text analysis: orchestrates field extraction and warning
//! generation over raw recognizer output.

mod fields;
pub mod rules;
mod warnings;

pub use fields::derive_fields_from_lines;
pub use warnings::build_warnings;

use tracing::debug;

use crate::models::analysis::{AnalysisFields, AnalysisResult, AnalysisType};

/// Split raw recognizer output into trimmed, non-empty lines,
/// preserving top-to-bottom order.
pub fn split_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Analyze raw recognized text under a benefit-type hint.
///
/// Never fails: unusable input degrades to empty fields plus
/// warnings. Upstream recognizer errors must be surfaced to this
/// entry point as empty text, not as errors to propagate.
pub fn analyze_text(raw_text: &str, analysis_type: AnalysisType) -> AnalysisResult {
    let lines = split_lines(raw_text);

    if lines.is_empty() {
        debug!("no usable text lines, short-circuiting analysis");
        return AnalysisResult {
            analysis_type,
            raw_text: raw_text.to_string(),
            lines,
            fields: AnalysisFields::default(),
            warnings: vec!["No text detected in image".to_string()],
        };
    }

    debug!(
        line_count = lines.len(),
        %analysis_type,
        "deriving fields from recognized lines"
    );

    let mut fields = derive_fields_from_lines(&lines, analysis_type);
    let warnings = build_warnings(&fields);

    // Coupons are never coverage records, even when an ambiguous scan
    // aliased the coverage date.
    if analysis_type == AnalysisType::Coupon && fields.expires_on.is_some() {
        fields.coverage_ends_on = None;
    }

    AnalysisResult {
        analysis_type,
        raw_text: raw_text.to_string(),
        lines,
        fields,
        warnings,
    }
}

/// Entry point for callers that already hold line-level recognizer
/// output. The same trim-and-drop invariant is applied before
/// extraction.
pub fn analyze_lines(lines: &[String], analysis_type: AnalysisType) -> AnalysisResult {
    analyze_text(&lines.join("\n"), analysis_type)
}
