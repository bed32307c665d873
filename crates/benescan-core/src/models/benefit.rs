//! Benefit records tracked by the wallet: coupons and warranties.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BenescanError;
use crate::reminders::ReminderThreshold;

/// A benefit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitType {
    Coupon,
    Warranty,
}

impl FromStr for BenefitType {
    type Err = BenescanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coupon" => Ok(Self::Coupon),
            "warranty" => Ok(Self::Warranty),
            _ => Err(BenescanError::UnknownBenefitType(s.to_string())),
        }
    }
}

impl fmt::Display for BenefitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coupon => f.write_str("coupon"),
            Self::Warranty => f.write_str("warranty"),
        }
    }
}

/// Which expiry reminders have already been delivered for a benefit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seven_day_sent_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_day_sent_at: Option<DateTime<Utc>>,
}

impl ReminderState {
    /// When the given threshold's reminder was delivered, if ever.
    pub fn sent_at(&self, threshold: ReminderThreshold) -> Option<DateTime<Utc>> {
        match threshold {
            ReminderThreshold::SevenDay => self.seven_day_sent_at,
            ReminderThreshold::OneDay => self.one_day_sent_at,
        }
    }

    /// Record a delivery for the given threshold.
    pub fn mark_sent(&mut self, threshold: ReminderThreshold, at: DateTime<Utc>) {
        match threshold {
            ReminderThreshold::SevenDay => self.seven_day_sent_at = Some(at),
            ReminderThreshold::OneDay => self.one_day_sent_at = Some(at),
        }
    }
}

/// A stored coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub merchant: String,
    pub description: String,
    pub expires_on: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_state: Option<ReminderState>,
}

/// A stored warranty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warranty {
    pub id: String,
    pub product_name: String,
    pub merchant: String,
    pub purchase_date: DateTime<Utc>,
    pub coverage_ends_on: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_state: Option<ReminderState>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_benefit_type_parsing() {
        assert_eq!("coupon".parse::<BenefitType>().unwrap(), BenefitType::Coupon);
        assert_eq!("WARRANTY".parse::<BenefitType>().unwrap(), BenefitType::Warranty);
        assert!("unknown".parse::<BenefitType>().is_err());
    }

    #[test]
    fn test_reminder_state_accessors() {
        let mut state = ReminderState::default();
        assert!(state.sent_at(ReminderThreshold::SevenDay).is_none());
        assert!(state.sent_at(ReminderThreshold::OneDay).is_none());

        let at = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
        state.mark_sent(ReminderThreshold::SevenDay, at);
        assert_eq!(state.sent_at(ReminderThreshold::SevenDay), Some(at));
        assert!(state.sent_at(ReminderThreshold::OneDay).is_none());
    }
}
