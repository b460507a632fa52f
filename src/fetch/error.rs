//! Error types for the HTTP transport.

use thiserror::Error;

/// Error type for transport-level HTTP failures.
///
/// Describes what went wrong without dictating recovery strategy. The
/// fetcher folds these into a [`super::FetchOutcome`], keeping the
/// timeout class distinct from everything else.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS negotiation failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request timed out inside the transport.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
