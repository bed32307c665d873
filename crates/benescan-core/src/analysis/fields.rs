//! Heuristic field derivation from recognized text lines.

use crate::models::analysis::{AnalysisFields, AnalysisType, FieldSuggestion};

use super::rules::{self, amounts, TieBreak, EXPIRY_KEYWORDS, PURCHASE_KEYWORDS};

/// Derive field suggestions from ordered, trimmed, non-empty lines.
///
/// Position and keyword heuristics only; each field is scanned
/// independently, so one line may populate several slots. Zero lines
/// yield an empty field set.
pub fn derive_fields_from_lines(lines: &[String], analysis_type: AnalysisType) -> AnalysisFields {
    let mut fields = AnalysisFields::default();

    // Weak default: receipts and coupons lead with the merchant name.
    if let Some(merchant) = lines.first() {
        fields.merchant = Some(FieldSuggestion::new(merchant.clone(), 0.45, merchant.as_str()));
    }

    if let Some(description) = lines.iter().skip(1).take(3).find(|l| l.chars().count() > 3) {
        fields.description = Some(FieldSuggestion::new(
            description.clone(),
            0.4,
            description.as_str(),
        ));
    }

    fields.expires_on = rules::best_dated_line(lines, EXPIRY_KEYWORDS, TieBreak::Latest);
    fields.purchase_date = rules::best_dated_line(lines, PURCHASE_KEYWORDS, TieBreak::Earliest);
    fields.total_amount = amounts::extract_total_amount(lines);

    if analysis_type == AnalysisType::Warranty {
        if let Some(product) = lines.iter().find(|l| l.to_lowercase().contains("warrant")) {
            fields.product_name = Some(FieldSuggestion::new(product.clone(), 0.5, product.as_str()));
        }
        // The date scan cannot tell "expires" from "coverage ends";
        // reuse the expiration candidate when nothing else surfaced.
        if fields.coverage_ends_on.is_none() {
            fields.coverage_ends_on = fields.expires_on.clone();
        }
    }

    fields
}
