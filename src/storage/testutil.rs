//! Shared test fixtures for the storage layer.

use std::sync::Mutex;

use super::{StorageError, StorageProvider, VolumeInfo};

/// A mock provider that returns predefined listings, one per call.
///
/// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `StorageError`.
/// Once the queued results are exhausted, further calls return an empty
/// listing.
pub(crate) struct MockStorage {
    results: Mutex<std::collections::VecDeque<Result<Vec<VolumeInfo>, StorageError>>>,
}

impl MockStorage {
    pub(crate) fn new(results: Vec<Result<Vec<VolumeInfo>, StorageError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }

    pub(crate) fn returning(listings: Vec<Vec<VolumeInfo>>) -> Self {
        Self::new(listings.into_iter().map(Ok).collect())
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::new(vec![Err(StorageError::Platform {
            message: message.to_string(),
        })])
    }
}

impl StorageProvider for MockStorage {
    fn removable_volumes(&self) -> Result<Vec<VolumeInfo>, StorageError> {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }
}
