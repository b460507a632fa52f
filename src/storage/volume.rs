//! Removable volume and lifecycle event types.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

/// One mounted removable volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeInfo {
    /// Volume name (typically the mount directory's name).
    pub name: String,
    /// Root directory the volume is mounted under.
    pub root: PathBuf,
}

impl VolumeInfo {
    /// Creates a new volume descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }
}

/// Lifecycle state reported by a storage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeState {
    /// The volume appeared since the previous listing.
    Inserted,
    /// The volume disappeared since the previous listing.
    Removed,
    /// The provider failed while the volume was believed present.
    Error,
}

impl fmt::Display for VolumeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Inserted => "Inserted",
            Self::Removed => "Removed",
            Self::Error => "Error",
        };
        f.write_str(s)
    }
}

/// One asynchronous storage notification.
///
/// Consumed by a stateless observer; the event owns its snapshot of the
/// volume so handlers need no access to provider state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// The affected volume.
    pub volume: VolumeInfo,
    /// What happened to it.
    pub state: VolumeState,
    /// When the watcher observed the change.
    pub at: SystemTime,
}

/// Computes lifecycle events between two volume listings.
///
/// Volumes are keyed by root path. New roots yield [`VolumeState::Inserted`],
/// vanished roots yield [`VolumeState::Removed`]; insertions are reported
/// before removals, each set in listing order.
#[must_use]
pub fn diff(prev: &[VolumeInfo], current: &[VolumeInfo], at: SystemTime) -> Vec<StorageEvent> {
    let mut events = Vec::new();

    for volume in current {
        if !prev.iter().any(|p| p.root == volume.root) {
            events.push(StorageEvent {
                volume: volume.clone(),
                state: VolumeState::Inserted,
                at,
            });
        }
    }

    for volume in prev {
        if !current.iter().any(|c| c.root == volume.root) {
            events.push(StorageEvent {
                volume: volume.clone(),
                state: VolumeState::Removed,
                at,
            });
        }
    }

    events
}
