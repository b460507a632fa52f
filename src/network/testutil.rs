//! Shared test fixtures for the network layer.

use std::sync::Mutex;

use super::{AdapterInfo, AdapterProvider, ProviderError};

/// A mock provider that returns predefined listings, one per call.
///
/// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `ProviderError`.
/// Once the queued results are exhausted, further calls return an empty
/// listing.
pub(crate) struct MockProvider {
    results: Mutex<std::collections::VecDeque<Result<Vec<AdapterInfo>, ProviderError>>>,
}

impl MockProvider {
    pub(crate) fn new(results: Vec<Result<Vec<AdapterInfo>, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }

    pub(crate) fn returning(adapters: Vec<Vec<AdapterInfo>>) -> Self {
        Self::new(adapters.into_iter().map(Ok).collect())
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::new(vec![Err(ProviderError::Enumeration {
            message: message.to_string(),
        })])
    }
}

impl AdapterProvider for MockProvider {
    fn adapters(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }
}
