//! Error types for the benescan-core library.
//!
//! The analysis engine itself is infallible: malformed text degrades
//! to empty fields plus warnings, never an error. Errors only arise
//! at the edges, when interpreting caller-supplied identifiers.

use thiserror::Error;

/// Main error type for the benescan library.
#[derive(Error, Debug)]
pub enum BenescanError {
    /// An analysis-type string was not `coupon`, `warranty`, or `unknown`.
    #[error("unknown analysis type: {0}")]
    UnknownAnalysisType(String),

    /// A benefit-type string was not `coupon` or `warranty`.
    #[error("unknown benefit type: {0}")]
    UnknownBenefitType(String),
}

/// Result type for the benescan library.
pub type Result<T> = std::result::Result<T, BenescanError>;
