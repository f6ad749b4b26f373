//! Error types for datetime and duration operations.

use thiserror::Error;

/// Every failure mode of this crate, as a distinguishable kind.
///
/// All errors are raised synchronously at the point of detection and are
/// never retried internally. The only fallback behavior in the crate is the
/// datetime parser trying each candidate format in order before giving up,
/// which surfaces as a single [`ZuluError::Parse`] listing every attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZuluError {
    /// Calendar field values out of range at construction time.
    #[error("Invalid datetime field: {0}")]
    Construction(String),

    /// Input matched none of the attempted datetime formats or duration
    /// grammars. For datetime parsing the message lists every format tried
    /// and its failure reason.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A derived value fell outside the representable range (years 1-9999,
    /// or a UTC offset outside the strict +/-24 hour band).
    #[error("Out of range: {0}")]
    Range(String),

    /// Unrecognized time frame name.
    #[error("Invalid time frame: {0}")]
    Frame(String),

    /// Unrecognized timezone identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unrecognized enumeration value (duration format style, granularity).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ZuluError>;
