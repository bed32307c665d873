//! Date normalization for OCR text fragments.
//!
//! Recognized dates are anchored at 12:00:00 UTC so that rendering
//! the instant in a client timezone cannot shift the calendar date.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use super::patterns::{DATE_ANY, DAY_FIRST_DATE, MONTH_FIRST_DATE, NUMERIC_DATE, ORDINAL_SUFFIX};

/// Case-insensitive month-name lookup, abbreviated and full English
/// names. `sept` is an accepted alternate for September.
fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Validate a calendar date and anchor it at midday UTC. Invalid
/// dates (month 13, day 45) yield `None` rather than wrapping.
fn at_midday_utc(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let midday = date.and_hms_opt(12, 0, 0)?;
    Some(Utc.from_utc_datetime(&midday))
}

/// Strip commas and ordinal suffixes, collapse whitespace.
fn sanitize(candidate: &str) -> String {
    let without_commas = candidate.replace(',', " ");
    let without_ordinals = ORDINAL_SUFFIX.replace_all(&without_commas, "$1");
    without_ordinals.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a short text fragment suspected of containing one date.
///
/// Supported forms, in priority order: numeric slash/hyphen dates
/// (with year-position disambiguation and two-digit year expansion),
/// month-name-first ("March 3, 2026"), day-first ("3rd of March
/// 2026"), and as a last resort an RFC 3339 timestamp.
pub fn parse_iso_date(candidate: &str) -> Option<DateTime<Utc>> {
    let sanitized = sanitize(candidate);
    if sanitized.is_empty() {
        return None;
    }

    if let Some(caps) = NUMERIC_DATE.captures(&sanitized) {
        let first: i32 = caps[1].parse().ok()?;
        let second: i32 = caps[2].parse().ok()?;
        let third: i32 = caps[3].parse().ok()?;

        let (year, month, day) = if first > 1900 {
            (first, second, third)
        } else if third > 1900 {
            (third, first, second)
        } else {
            // Two-digit years read as 2000+YY.
            let year = if third >= 100 { third } else { 2000 + third };
            (year, first, second)
        };

        let month = u32::try_from(month).ok()?;
        let day = u32::try_from(day).ok()?;
        return at_midday_utc(year, month, day);
    }

    if let Some(caps) = MONTH_FIRST_DATE.captures(&sanitized) {
        if let Some(month) = month_number(&caps[1]) {
            let day: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return at_midday_utc(year, month, day);
        }
    }

    if let Some(caps) = DAY_FIRST_DATE.captures(&sanitized) {
        if let Some(month) = month_number(&caps[2]) {
            let day: u32 = caps[1].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;
            return at_midday_utc(year, month, day);
        }
    }

    // Fragments the shaped patterns miss: a full timestamp from an
    // upstream system rather than printed text.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&sanitized) {
        let date = timestamp.date_naive();
        return at_midday_utc(date.year(), date.month(), date.day());
    }

    None
}

/// Find and normalize every date-like fragment on a line, skipping
/// fragments that fail calendar validation.
pub fn scan_dates(line: &str) -> Vec<DateTime<Utc>> {
    DATE_ANY
        .find_iter(line)
        .filter_map(|m| parse_iso_date(m.as_str()))
        .collect()
}
