//! Mount-scan storage provider.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{StorageError, StorageProvider, VolumeInfo};

/// Production [`StorageProvider`] that lists removable volumes as the
/// immediate subdirectories of configured mount roots.
///
/// Embedded targets mount removable media under well-known roots
/// (`/media`, `/mnt`, `/run/media/<user>` on Linux, `/Volumes` on
/// macOS); each mounted volume appears as one directory there. Roots
/// that do not exist or are not readable are skipped, so an absent
/// automounter degrades to "no removable storage" rather than an error.
#[derive(Debug, Clone)]
pub struct MountScanProvider {
    roots: Vec<PathBuf>,
}

impl MountScanProvider {
    /// Creates a provider scanning the given mount roots.
    #[must_use]
    pub const fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Returns the platform's default mount roots.
    #[must_use]
    pub fn default_roots() -> Vec<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            let mut roots = vec![PathBuf::from("/media"), PathBuf::from("/mnt")];
            if let Ok(user) = std::env::var("USER") {
                roots.push(PathBuf::from("/run/media").join(user));
            }
            roots
        }
        #[cfg(target_os = "macos")]
        {
            vec![PathBuf::from("/Volumes")]
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            Vec::new()
        }
    }

    /// Returns the configured mount roots.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl Default for MountScanProvider {
    fn default() -> Self {
        Self::new(Self::default_roots())
    }
}

impl StorageProvider for MountScanProvider {
    fn removable_volumes(&self) -> Result<Vec<VolumeInfo>, StorageError> {
        let mut volumes = Vec::new();

        for root in &self.roots {
            let entries = match std::fs::read_dir(root) {
                Ok(entries) => entries,
                Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                    continue;
                }
                Err(e) => {
                    return Err(StorageError::Io {
                        path: root.clone(),
                        source: e,
                    });
                }
            };

            for entry in entries {
                let entry = entry.map_err(|e| StorageError::Io {
                    path: root.clone(),
                    source: e,
                })?;
                let path = entry.path();
                if path.is_dir() {
                    volumes.push(VolumeInfo::new(
                        entry.file_name().to_string_lossy(),
                        path,
                    ));
                }
            }
        }

        // Stable order keeps the probe target and watcher diffs deterministic.
        volumes.sort_by(|a, b| a.root.cmp(&b.root));
        Ok(volumes)
    }
}
