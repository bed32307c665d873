//! Total-amount extraction from receipt lines.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::TOTAL_AMOUNT;
use crate::models::analysis::FieldSuggestion;

/// Scan lines bottom-up for a keyword-anchored amount. Receipts put
/// the grand total near the end, so the last occurrence wins.
pub fn extract_total_amount(lines: &[String]) -> Option<FieldSuggestion<Decimal>> {
    for line in lines.iter().rev() {
        if let Some(caps) = TOTAL_AMOUNT.captures(line) {
            let cleaned = caps[2].replace(',', "");
            if let Ok(amount) = Decimal::from_str(&cleaned) {
                return Some(FieldSuggestion::new(amount, 0.8, line.as_str()));
            }
        }
    }
    None
}
