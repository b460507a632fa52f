//! HTTP transport trait and response type.

use super::TransportError;

/// An HTTP response received from a server.
///
/// Contains the status code and the fully buffered body. Uses standard
/// `http` crate types for the status, ensuring compatibility with the
/// broader ecosystem regardless of the client implementation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for issuing HTTP GET requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping HTTP libraries without changing calling code
///
/// The transport performs one request per call and owns no retry or
/// timeout policy; the total-duration bound is the fetcher's concern.
pub trait HttpTransport: Send + Sync {
    /// Issues a single GET request to the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - The connection fails ([`TransportError::Connection`])
    /// - The transport's own timeout fires ([`TransportError::Timeout`])
    /// - The URL is rejected ([`TransportError::InvalidUrl`])
    fn get(
        &self,
        url: url::Url,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_success_for_2xx() {
        let response = HttpResponse::new(http::StatusCode::OK, b"ok".to_vec());
        assert!(response.is_success());
    }

    #[test]
    fn is_not_success_for_5xx() {
        let response = HttpResponse::new(http::StatusCode::INTERNAL_SERVER_ERROR, Vec::new());
        assert!(!response.is_success());
    }

    #[test]
    fn body_text_decodes_utf8() {
        let response = HttpResponse::new(http::StatusCode::OK, "héllo".as_bytes().to_vec());
        assert_eq!(response.body_text(), Some("héllo"));
    }

    #[test]
    fn body_text_none_for_invalid_utf8() {
        let response = HttpResponse::new(http::StatusCode::OK, vec![0xff, 0xfe]);
        assert!(response.body_text().is_none());
    }
}
