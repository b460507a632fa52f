//! Production HTTP transport implementation using reqwest.

use super::{HttpResponse, HttpTransport, TransportError};

/// Production HTTP transport using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements the
/// [`HttpTransport`] trait. The client carries no request timeout of its
/// own; the fetcher enforces the total-duration bound, so a slow server
/// surfaces as the fetcher's timeout rather than a transport error.
///
/// # Example
///
/// ```no_run
/// use netcheck::fetch::{ReqwestTransport, HttpTransport};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = Url::parse("https://example.com/")?;
/// let response = transport.get(url).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new HTTP transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (TLS, proxies, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: url::Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .inner
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else if e.is_builder() {
                    TransportError::InvalidUrl(e.to_string())
                } else {
                    TransportError::Connection(Box::new(e))
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_client() {
        let transport = ReqwestTransport::new();
        let debug = format!("{transport:?}");
        assert!(debug.contains("ReqwestTransport"));
    }

    #[test]
    fn default_creates_same_as_new() {
        let transport1 = ReqwestTransport::new();
        let transport2 = ReqwestTransport::default();

        let _ = format!("{transport1:?}");
        let _ = format!("{transport2:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder().build().unwrap();
        let transport = ReqwestTransport::from_client(custom);

        let _ = format!("{transport:?}");
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }

    #[tokio::test]
    async fn get_to_unresolvable_host_returns_error_or_proxy_response() {
        let transport = ReqwestTransport::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = transport.get(url).await;

        // DNS resolution failure typically causes a connection error.
        // However, in environments with a proxy, the proxy may return an
        // HTTP error response (e.g., 502 Bad Gateway) instead.
        match result {
            Err(TransportError::Connection(_)) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
