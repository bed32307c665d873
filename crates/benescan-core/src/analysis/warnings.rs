//! Warning generation for fields the entry form requires.

use crate::models::analysis::AnalysisFields;

/// List human-readable gaps in an extracted field set.
///
/// Purchase date, product name, and amount are best-effort fields and
/// never warned about.
pub fn build_warnings(fields: &AnalysisFields) -> Vec<String> {
    let mut warnings = Vec::new();

    if fields.merchant.is_none() {
        warnings.push("Merchant not detected".to_string());
    }
    if fields.description.is_none() {
        warnings.push("Description not detected".to_string());
    }
    if fields.expires_on.is_none() && fields.coverage_ends_on.is_none() {
        warnings.push("Expiration or coverage date not detected".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::analysis::FieldSuggestion;

    #[test]
    fn test_empty_fields_warn_on_all_required() {
        let warnings = build_warnings(&AnalysisFields::default());
        assert_eq!(
            warnings,
            vec![
                "Merchant not detected",
                "Description not detected",
                "Expiration or coverage date not detected",
            ]
        );
    }

    #[test]
    fn test_complete_fields_warn_nothing() {
        let mut fields = AnalysisFields::default();
        fields.merchant = Some(FieldSuggestion::new("Acme Store".to_string(), 0.45, "Acme Store"));
        fields.description = Some(FieldSuggestion::new("10% off".to_string(), 0.4, "10% off"));
        fields.expires_on = Some(FieldSuggestion::new(
            Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).unwrap(),
            0.85,
            "Valid thru 12/25/2025",
        ));

        assert!(build_warnings(&fields).is_empty());
    }

    #[test]
    fn test_coverage_date_satisfies_date_requirement() {
        let mut fields = AnalysisFields::default();
        fields.coverage_ends_on = Some(FieldSuggestion::new(
            Utc.with_ymd_and_hms(2027, 1, 1, 12, 0, 0).unwrap(),
            0.85,
            "coverage through 01/01/2027",
        ));

        let warnings = build_warnings(&fields);
        assert!(!warnings.iter().any(|w| w.contains("Expiration")));
        assert!(warnings.iter().any(|w| w == "Merchant not detected"));
    }

    #[test]
    fn test_optional_fields_never_warn() {
        let mut fields = AnalysisFields::default();
        fields.merchant = Some(FieldSuggestion::new("Store".to_string(), 0.45, "Store"));
        fields.description = Some(FieldSuggestion::new("Deal".to_string(), 0.4, "Deal"));
        fields.expires_on = Some(FieldSuggestion::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
            0.55,
            "1/1/2025",
        ));
        // purchase_date, product_name, total_amount all absent
        assert!(build_warnings(&fields).is_empty());
    }
}
