//! Error types for date handling.

/// Errors from date validation or parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real date/time.
    #[error("invalid date/time: {0}")]
    InvalidDate(String),
    /// A date string could not be parsed.
    #[error("date parse error: {0}")]
    Parse(String),
}
