//! Adapter provider trait and error types.

use super::{AdapterInfo, AdapterKind};
use thiserror::Error;

/// Error type for adapter enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant; the orchestrator
/// converts all of them to log lines.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The underlying enumeration API failed.
    #[error("Adapter enumeration failed: {message}")]
    Enumeration {
        /// Error message from the platform API.
        message: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for the host's network capability provider.
///
/// # Design
///
/// - Handles are passed explicitly to components rather than resolved
///   from ambient global state
/// - Enables dependency injection for testing with mock implementations
/// - The production implementation lives in [`super::platform`]
pub trait AdapterProvider: Send + Sync {
    /// Enumerates all network adapters on the host.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the platform enumeration API fails.
    ///
    /// # Implementation Notes
    ///
    /// - Implementations return ALL adapters; the inspector reports every
    ///   one of them
    /// - Address order within each adapter should be stable across calls
    fn adapters(&self) -> Result<Vec<AdapterInfo>, ProviderError>;

    /// Returns the host's primary wired adapter, if one exists.
    ///
    /// The default implementation selects the first Ethernet-kind adapter
    /// from [`Self::adapters`]. Platform implementations may override this
    /// when the host designates a primary explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when enumeration fails.
    fn primary_wired(&self) -> Result<Option<AdapterInfo>, ProviderError> {
        Ok(self
            .adapters()?
            .into_iter()
            .find(|a| a.kind == AdapterKind::Ethernet))
    }
}
