//! The resilient fetcher: one bounded GET, outcome by class.

use std::time::Duration;

use url::Url;

use super::{FetchOutcome, HttpResponse, HttpTransport, TransportError};

/// Upper bound on the total duration of one request.
///
/// Five minutes tolerates slow or high-latency embedded links while
/// still bounding the worst-case hang.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Issues a single bounded-timeout GET and classifies the result.
///
/// The fetcher performs exactly one request per [`Fetcher::fetch`] call —
/// no implicit retry. It does not depend on the connectivity gate for
/// correctness: a downed link surfaces as an ordinary
/// [`FetchOutcome::Failure`].
///
/// # Resource safety
///
/// The bound is enforced by wrapping the transport future in
/// [`tokio::time::timeout`]; when it expires the in-flight future is
/// dropped, which releases the underlying connection. No exit path
/// leaks the transport resource.
#[derive(Debug)]
pub struct Fetcher<T> {
    transport: T,
    timeout: Duration,
}

impl<T: HttpTransport> Fetcher<T> {
    /// Creates a fetcher with the default [`REQUEST_TIMEOUT`].
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the total-duration bound.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured total-duration bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs one GET against `url` and returns the tagged outcome.
    ///
    /// - 2xx with a UTF-8 body → [`FetchOutcome::Success`]
    /// - bound elapsed, or the transport's own timeout → [`FetchOutcome::Timeout`]
    /// - everything else → [`FetchOutcome::Failure`] with a diagnostic message
    pub async fn fetch(&self, url: &Url) -> FetchOutcome {
        match tokio::time::timeout(self.timeout, self.transport.get(url.clone())).await {
            Err(_elapsed) => FetchOutcome::Timeout,
            Ok(Err(TransportError::Timeout)) => FetchOutcome::Timeout,
            Ok(Err(e)) => FetchOutcome::Failure(e.to_string()),
            Ok(Ok(response)) => classify(&response),
        }
    }
}

/// Classifies a completed response into an outcome.
///
/// The caller never receives a raw unchecked response: non-success
/// statuses become failures with the status surfaced in the message.
fn classify(response: &HttpResponse) -> FetchOutcome {
    if !response.is_success() {
        return FetchOutcome::Failure(format!("HTTP status {}", response.status));
    }

    response.body_text().map_or_else(
        || FetchOutcome::Failure("Response body is not valid UTF-8".to_string()),
        |text| FetchOutcome::Success(text.to_string()),
    )
}
