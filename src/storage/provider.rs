//! Storage provider trait and error types.

use std::path::PathBuf;

use thiserror::Error;

use super::VolumeInfo;

/// Error type for storage operations.
///
/// Non-fatal by policy: the orchestrator converts every variant into a
/// log line and carries on.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("Storage I/O error at '{}': {source}", path.display())]
    Io {
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for the host's removable-storage capability provider.
///
/// Handles are injected into the probe and watcher explicitly rather
/// than resolved from ambient global state, so tests can substitute
/// mock listings.
pub trait StorageProvider: Send + Sync {
    /// Lists the currently mounted removable volumes.
    ///
    /// The order should be stable across calls for unchanged state; the
    /// first listed volume is the probe's target.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the listing itself fails. An empty
    /// listing is not an error.
    fn removable_volumes(&self) -> Result<Vec<VolumeInfo>, StorageError>;
}
