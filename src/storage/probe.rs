//! Marker-file probe for the first removable volume.

use std::path::PathBuf;

use super::{StorageError, StorageProvider};

/// Result of a successful marker write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFile {
    /// Full path of the written marker.
    pub path: PathBuf,
    /// Byte length read back from the re-opened file.
    pub len: u64,
}

/// Writes a marker file to the first available removable volume.
///
/// Returns `Ok(None)` when no removable volume is present — absence is a
/// diagnostic result, not an error. On success the marker is re-opened
/// and its length read from the open handle's metadata, proving the
/// write completed and is visible on the volume. All handles are scoped
/// to this call and released on every exit path.
///
/// # Errors
///
/// Returns [`StorageError`] when listing volumes, writing, or re-reading
/// fails. Callers report the error and continue; nothing here is fatal.
pub async fn write_marker<P: StorageProvider>(
    provider: &P,
    file_name: &str,
    content: &str,
) -> Result<Option<MarkerFile>, StorageError> {
    let Some(volume) = provider.removable_volumes()?.into_iter().next() else {
        return Ok(None);
    };

    let path = volume.root.join(file_name);

    tokio::fs::write(&path, content)
        .await
        .map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;

    // Re-open rather than trusting the write: the size reported to the
    // caller comes from the volume, not from the buffer we handed out.
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;
    let len = file
        .metadata()
        .await
        .map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?
        .len();

    Ok(Some(MarkerFile { path, len }))
}
