//! Tagged result of one HTTP fetch attempt.

/// Outcome of a single HTTP round-trip.
///
/// Timeout is deliberately its own variant rather than a failure
/// message: a timed-out request is transient in a way other transport
/// failures may not be, and callers and tests assert on the exact
/// failure class instead of string matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request completed with a success status; carries the body text.
    Success(String),
    /// The request exceeded the configured total-duration bound.
    Timeout,
    /// Any other failure: transport errors and non-success HTTP statuses.
    Failure(String),
}

impl FetchOutcome {
    /// Returns true for [`Self::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for [`Self::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_success() {
        assert!(FetchOutcome::Success("ok".to_string()).is_success());
        assert!(!FetchOutcome::Timeout.is_success());
        assert!(!FetchOutcome::Failure("boom".to_string()).is_success());
    }

    #[test]
    fn timeout_is_distinguishable_from_failure() {
        assert!(FetchOutcome::Timeout.is_timeout());
        assert!(!FetchOutcome::Failure("timed out".to_string()).is_timeout());
    }
}
