//! Data models for benefits and analysis results.

pub mod analysis;
pub mod benefit;
