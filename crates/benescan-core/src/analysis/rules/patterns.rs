//! Regex patterns for benefit text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any date-like fragment: numeric M/D/Y, numeric Y-M-D,
    /// month-name-first, or day-first forms.
    pub static ref DATE_ANY: Regex = Regex::new(
        r"(\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b)|(\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b)|(\b[A-Za-z]{3,9}\s+\d{1,2}(?:st|nd|rd|th)?,?\s*\d{4}\b)|(\b\d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?[A-Za-z]{3,9},?\s*\d{4}\b)"
    ).unwrap();

    /// Slash- or hyphen-separated numeric date, anchored to a whole
    /// sanitized fragment.
    pub static ref NUMERIC_DATE: Regex = Regex::new(
        r"^(\d{1,4})[/-](\d{1,2})[/-](\d{1,4})$"
    ).unwrap();

    /// "March 3 2026" (comma already stripped by sanitization).
    pub static ref MONTH_FIRST_DATE: Regex = Regex::new(
        r"(?i)^([A-Za-z]{3,9})\s+(\d{1,2})\s*(\d{4})$"
    ).unwrap();

    /// "3 of March 2026" (ordinal already stripped by sanitization).
    pub static ref DAY_FIRST_DATE: Regex = Regex::new(
        r"(?i)^(\d{1,2})\s+(?:of\s+)?([A-Za-z]{3,9})\s*(\d{4})$"
    ).unwrap();

    /// Ordinal suffix on a day number ("3rd", "21st").
    pub static ref ORDINAL_SUFFIX: Regex = Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b"
    ).unwrap();

    /// Amount following a total-like keyword, with optional thousands
    /// separators and two decimal digits.
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)(total|amount|balance|due)\D{0,8}(\d{1,3}(?:[.,]\d{3})*\.?\d{2})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_any_matches_all_forms() {
        assert!(DATE_ANY.is_match("Valid thru 12/25/2025"));
        assert!(DATE_ANY.is_match("2024-01-15"));
        assert!(DATE_ANY.is_match("Expires March 3, 2026"));
        assert!(DATE_ANY.is_match("3rd of March 2026"));
        assert!(!DATE_ANY.is_match("no dates here"));
    }

    #[test]
    fn test_date_any_finds_multiple_per_line() {
        let hits: Vec<&str> = DATE_ANY
            .find_iter("valid thru 3/1/2025 - 5/1/2025")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["3/1/2025", "5/1/2025"]);
    }

    #[test]
    fn test_total_amount_forms() {
        let caps = TOTAL_AMOUNT.captures("TOTAL: $12.34").unwrap();
        assert_eq!(&caps[2], "12.34");

        let caps = TOTAL_AMOUNT.captures("Amount due 1,234.56").unwrap();
        assert_eq!(&caps[2], "1,234.56");

        assert!(!TOTAL_AMOUNT.is_match("subtotal text with no number"));
    }
}
