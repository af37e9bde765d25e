//! Error types for the lunar phase engine.

/// Errors from batch phase queries.
///
/// Single-instant computations are total and never fail; only queries that
/// take a calendar month index can be handed an invalid argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PhaseError {
    /// Month index outside 0 (January) ..= 11 (December).
    #[error("month index {0} out of range 0..=11")]
    InvalidMonth(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_month_display() {
        assert_eq!(
            PhaseError::InvalidMonth(12).to_string(),
            "month index 12 out of range 0..=11"
        );
    }
}
