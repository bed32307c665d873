//! Expiry reminder scheduling.
//!
//! Pure date arithmetic deciding which notification thresholds a
//! stored benefit crosses at a given instant. Delivery and storage
//! belong to the calling application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::benefit::{BenefitType, Coupon, ReminderState, Warranty};

/// A days-before-due mark at which a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderThreshold {
    SevenDay,
    OneDay,
}

impl ReminderThreshold {
    /// All thresholds, furthest out first.
    pub const ALL: [ReminderThreshold; 2] = [ReminderThreshold::SevenDay, ReminderThreshold::OneDay];

    /// How many days before the due date this threshold fires.
    pub fn days(self) -> i64 {
        match self {
            ReminderThreshold::SevenDay => 7,
            ReminderThreshold::OneDay => 1,
        }
    }
}

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days until the due instant, rounded up. A due date later
/// today counts as 1 only once more than a full day remains.
pub fn days_until(now: DateTime<Utc>, due: DateTime<Utc>) -> i64 {
    let diff_ms = (due - now).num_milliseconds() as f64;
    (diff_ms / MILLIS_PER_DAY).ceil() as i64
}

/// Thresholds that fire right now for a benefit due at `due`.
///
/// A threshold fires when the day distance matches it exactly and it
/// has not been delivered before.
pub fn due_thresholds(
    now: DateTime<Utc>,
    due: DateTime<Utc>,
    state: &ReminderState,
) -> Vec<ReminderThreshold> {
    let days = days_until(now, due);
    ReminderThreshold::ALL
        .into_iter()
        .filter(|threshold| threshold.days() == days && state.sent_at(*threshold).is_none())
        .collect()
}

/// A reminder row surfaced to the notification layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSummary {
    pub benefit_id: String,
    pub benefit_type: BenefitType,
    /// Notification title.
    pub title: String,
    /// Notification body, e.g. "Acme Store due on Dec 25".
    pub body: String,
    pub due_on: DateTime<Utc>,
    pub threshold_days: i64,
}

/// Short human label for a due date ("Dec 25").
pub fn format_due_date(due: DateTime<Utc>) -> String {
    due.format("%b %-d").to_string()
}

/// Summaries for every threshold a coupon crosses at `now`, keyed on
/// its expiration date.
pub fn coupon_reminders(now: DateTime<Utc>, coupon: &Coupon) -> Vec<ReminderSummary> {
    let state = coupon.reminder_state.unwrap_or_default();
    due_thresholds(now, coupon.expires_on, &state)
        .into_iter()
        .map(|threshold| ReminderSummary {
            benefit_id: coupon.id.clone(),
            benefit_type: BenefitType::Coupon,
            title: "Coupon expiring soon".to_string(),
            body: format!("{} due on {}", coupon.merchant, format_due_date(coupon.expires_on)),
            due_on: coupon.expires_on,
            threshold_days: threshold.days(),
        })
        .collect()
}

/// Summaries for every threshold a warranty crosses at `now`, keyed
/// on its coverage end date.
pub fn warranty_reminders(now: DateTime<Utc>, warranty: &Warranty) -> Vec<ReminderSummary> {
    let state = warranty.reminder_state.unwrap_or_default();
    due_thresholds(now, warranty.coverage_ends_on, &state)
        .into_iter()
        .map(|threshold| ReminderSummary {
            benefit_id: warranty.id.clone(),
            benefit_type: BenefitType::Warranty,
            title: "Warranty coverage ending soon".to_string(),
            body: format!(
                "{} due on {}",
                warranty.product_name,
                format_due_date(warranty.coverage_ends_on)
            ),
            due_on: warranty.coverage_ends_on,
            threshold_days: threshold.days(),
        })
        .collect()
}
