//! Rule-based extraction heuristics shared by the field derivation
//! pass: keyword tables, context scoring, and the best-candidate fold
//! used for date fields.

pub mod amounts;
pub mod dates;
pub mod patterns;

use chrono::{DateTime, Utc};

use crate::models::analysis::FieldSuggestion;
use dates::scan_dates;

/// Words suggesting a line's date is an expiration or validity bound.
pub const EXPIRY_KEYWORDS: &[&str] = &["expire", "valid", "thru", "through", "until", "redeem"];

/// Words suggesting a line's date is a purchase or issue date.
pub const PURCHASE_KEYWORDS: &[&str] = &["purchase", "purchased", "bought", "order", "date", "issued"];

/// Words indicating the line spans a date range ("valid thru 3/1 - 5/1").
pub const RANGE_WORDS: &[&str] = &["thru", "through", "until"];

/// Context confidence for a date-bearing line: lines whose wording
/// names the date's role score higher than bare dates.
pub fn score_for_context(line: &str, keywords: &[&str]) -> f32 {
    let lowered = line.to_lowercase();
    if keywords.iter().any(|k| lowered.contains(k)) {
        0.85
    } else {
        0.55
    }
}

/// Tie-break direction when two candidates carry equal confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Prefer the later date (expiration scans).
    Latest,
    /// Prefer the earlier date (purchase scans).
    Earliest,
}

/// Whether a newly scanned candidate should replace the current best:
/// strictly higher confidence always wins, and on equal confidence
/// the bias direction decides.
pub fn prefer_candidate(
    current: Option<(f32, DateTime<Utc>)>,
    confidence: f32,
    candidate: DateTime<Utc>,
    bias: TieBreak,
) -> bool {
    match current {
        None => true,
        Some((best_confidence, best_value)) => {
            if confidence > best_confidence {
                true
            } else if confidence == best_confidence {
                match bias {
                    TieBreak::Latest => candidate > best_value,
                    TieBreak::Earliest => candidate < best_value,
                }
            } else {
                false
            }
        }
    }
}

/// Fold over lines tracking the best dated candidate for one field.
///
/// Range lines read toward the bias (latest date for expiry scans,
/// first match for purchase scans); otherwise position on the line
/// decides. The two date fields run this independently, so one line
/// may feed both.
pub fn best_dated_line(
    lines: &[String],
    keywords: &[&str],
    bias: TieBreak,
) -> Option<FieldSuggestion<DateTime<Utc>>> {
    let mut best: Option<FieldSuggestion<DateTime<Utc>>> = None;

    for line in lines {
        let dates = scan_dates(line);
        if dates.is_empty() {
            continue;
        }

        let confidence = score_for_context(line, keywords);
        let lowered = line.to_lowercase();
        let spans_range = RANGE_WORDS.iter().any(|w| lowered.contains(w));

        let candidate = match bias {
            TieBreak::Latest if spans_range => dates.iter().copied().max().unwrap_or(dates[0]),
            TieBreak::Earliest if !spans_range => dates.iter().copied().min().unwrap_or(dates[0]),
            _ => dates[0],
        };

        let current = best.as_ref().map(|b| (b.confidence, b.value));
        if prefer_candidate(current, confidence, candidate, bias) {
            best = Some(FieldSuggestion::new(candidate, confidence, line.as_str()));
        }
    }

    best
}
