//! Analysis output models: field suggestions, extracted fields, results.
//!
//! Serialized names are camelCase to match the shape the form-filling
//! UI consumes (`expiresOn`, `sourceText`, ...).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BenescanError;
use crate::models::benefit::BenefitType;

/// One inferred value plus its provenance and a confidence score.
///
/// The confidence is used for tie-breaking when multiple candidates
/// appear on different lines; `source_text` is the exact line the
/// value came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSuggestion<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// The line the value was derived from.
    pub source_text: String,
}

impl<T> FieldSuggestion<T> {
    pub fn new(value: T, confidence: f32, source_text: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            source_text: source_text.into(),
        }
    }
}

/// Benefit-type hint passed alongside recognized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Coupon,
    Warranty,
    Unknown,
}

impl From<BenefitType> for AnalysisType {
    fn from(benefit_type: BenefitType) -> Self {
        match benefit_type {
            BenefitType::Coupon => Self::Coupon,
            BenefitType::Warranty => Self::Warranty,
        }
    }
}

impl FromStr for AnalysisType {
    type Err = BenescanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coupon" => Ok(Self::Coupon),
            "warranty" => Ok(Self::Warranty),
            "unknown" => Ok(Self::Unknown),
            _ => Err(BenescanError::UnknownAnalysisType(s.to_string())),
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Coupon => "coupon",
            Self::Warranty => "warranty",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Optional field slots inferred from recognized text.
///
/// Absence means "undetected", which is distinct from an empty string
/// or a zero amount. Slots are filled at most once per analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<FieldSuggestion<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldSuggestion<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<FieldSuggestion<DateTime<Utc>>>,

    /// Warranty analyses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<FieldSuggestion<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<FieldSuggestion<DateTime<Utc>>>,

    /// Warranty analyses only; aliased from `expires_on` when the date
    /// scan cannot tell the two apart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_ends_on: Option<FieldSuggestion<DateTime<Utc>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<FieldSuggestion<Decimal>>,
}

/// The full structured-extraction output for one scanned image.
///
/// Stateless and identity-free; a fresh one is produced per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The benefit-type hint the analysis ran under.
    pub analysis_type: AnalysisType,

    /// Raw recognizer output, unmodified.
    pub raw_text: String,

    /// Raw text split on line breaks, trimmed, empty lines dropped,
    /// original top-to-bottom order preserved. Line position is a
    /// weak merchant/description signal, so order matters.
    pub lines: Vec<String>,

    /// Inferred field suggestions.
    pub fields: AnalysisFields,

    /// Human-readable gaps for fields the entry form requires.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_analysis_type_from_str() {
        assert_eq!(AnalysisType::from_str("coupon").unwrap(), AnalysisType::Coupon);
        assert_eq!(AnalysisType::from_str("Warranty").unwrap(), AnalysisType::Warranty);
        assert_eq!(AnalysisType::from_str("unknown").unwrap(), AnalysisType::Unknown);
        assert!(AnalysisType::from_str("receipt").is_err());
    }

    #[test]
    fn test_fields_serialize_camel_case() {
        let mut fields = AnalysisFields::default();
        fields.merchant = Some(FieldSuggestion::new("Acme Store".to_string(), 0.45, "Acme Store"));
        fields.expires_on = Some(FieldSuggestion::new(
            Utc.with_ymd_and_hms(2025, 12, 25, 12, 0, 0).unwrap(),
            0.85,
            "Valid thru 12/25/2025",
        ));
        fields.total_amount = Some(FieldSuggestion::new(
            Decimal::from_str("12.34").unwrap(),
            0.8,
            "Total: $12.34",
        ));

        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.contains("\"merchant\""));
        assert!(json.contains("\"expiresOn\""));
        assert!(json.contains("\"totalAmount\""));
        assert!(json.contains("\"sourceText\""));
        assert!(json.contains("2025-12-25T12:00:00"));
        // serde-float keeps the amount a JSON number
        assert!(json.contains("\"value\":12.34"));
        // absent slots are omitted entirely
        assert!(!json.contains("purchaseDate"));
    }

    #[test]
    fn test_result_round_trips() {
        let result = AnalysisResult {
            analysis_type: AnalysisType::Coupon,
            raw_text: "Acme Store\n10% off".to_string(),
            lines: vec!["Acme Store".to_string(), "10% off".to_string()],
            fields: AnalysisFields::default(),
            warnings: vec!["Expiration or coverage date not detected".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"analysisType\":\"coupon\""));
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
