//! Storage layer: removable-volume probing and attach/detach events.
//!
//! This module provides types and traits for:
//! - Volume descriptors and lifecycle events ([`VolumeInfo`], [`StorageEvent`])
//! - The capability-provider seam ([`StorageProvider`])
//! - The marker-file probe ([`write_marker`], [`MarkerFile`])
//! - The notification stream ([`StorageWatcher`], [`WatchStream`])
//! - The production provider ([`MountScanProvider`])

mod platform;
mod probe;
mod provider;
mod volume;
mod watcher;

#[cfg(test)]
pub(crate) mod testutil;
#[cfg(test)]
mod watcher_tests;

pub use platform::MountScanProvider;
pub use probe::{MarkerFile, write_marker};
pub use provider::{StorageError, StorageProvider};
pub use volume::{StorageEvent, VolumeInfo, VolumeState, diff};
pub use watcher::{StorageWatcher, WatchStream};
