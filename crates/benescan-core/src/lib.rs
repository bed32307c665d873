//! Core library for benefit wallet OCR analysis.
//!
//! This crate provides:
//! - Date normalization for heterogeneous OCR date fragments
//! - Heuristic field extraction (merchant, description, dates, amounts)
//! - Warning generation for fields the entry form requires
//! - Expiry reminder scheduling helpers for stored benefits

pub mod analysis;
pub mod error;
pub mod models;
pub mod reminders;

pub use analysis::rules::dates::parse_iso_date;
pub use analysis::{analyze_lines, analyze_text, build_warnings, derive_fields_from_lines, split_lines};
pub use error::{BenescanError, Result};
pub use models::analysis::{AnalysisFields, AnalysisResult, AnalysisType, FieldSuggestion};
pub use models::benefit::{BenefitType, Coupon, ReminderState, Warranty};
pub use reminders::{
    coupon_reminders, days_until, due_thresholds, warranty_reminders, ReminderSummary,
    ReminderThreshold,
};
