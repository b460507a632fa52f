//! Tests for the storage watcher stream.

use std::time::Duration;

use tokio_stream::StreamExt;

use super::testutil::MockStorage;
use super::{StorageWatcher, VolumeInfo, VolumeState};

fn vol(name: &str) -> VolumeInfo {
    VolumeInfo::new(name, format!("/media/{name}"))
}

const POLL: Duration = Duration::from_secs(2);

#[tokio::test(start_paused = true)]
async fn insertion_after_baseline_emits_inserted() {
    let provider = MockStorage::returning(vec![vec![], vec![vol("sd0")]]);
    let mut stream = StorageWatcher::new(provider, POLL).into_stream();

    let events = stream.next().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].state, VolumeState::Inserted);
    assert_eq!(events[0].volume.name, "sd0");
}

#[tokio::test(start_paused = true)]
async fn removal_emits_removed() {
    // Baseline has the volume; the exhausted mock then reports empty.
    let provider = MockStorage::returning(vec![vec![vol("sd0")]]);
    let mut stream = StorageWatcher::new(provider, POLL).into_stream();

    let events = stream.next().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].state, VolumeState::Removed);
    assert_eq!(events[0].volume.name, "sd0");
}

#[tokio::test(start_paused = true)]
async fn unchanged_listing_emits_nothing_until_a_change() {
    let provider = MockStorage::returning(vec![
        vec![vol("sd0")],
        vec![vol("sd0")],
        vec![vol("sd0")],
        vec![vol("sd0"), vol("sd1")],
    ]);
    let mut stream = StorageWatcher::new(provider, POLL).into_stream();

    let events = stream.next().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].state, VolumeState::Inserted);
    assert_eq!(events[0].volume.name, "sd1");
}

#[tokio::test(start_paused = true)]
async fn provider_failure_emits_error_once_per_known_volume() {
    let provider = MockStorage::new(vec![
        Ok(vec![vol("sd0"), vol("sd1")]),
        Err(crate::storage::StorageError::Platform {
            message: "usb stack offline".to_string(),
        }),
        Err(crate::storage::StorageError::Platform {
            message: "usb stack offline".to_string(),
        }),
        // Recovery: both volumes still present, so no diff events; the
        // exhausted mock then reports empty and removal fires.
        Ok(vec![vol("sd0"), vol("sd1")]),
    ]);
    let mut stream = StorageWatcher::new(provider, POLL).into_stream();

    let errors = stream.next().await.unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.state == VolumeState::Error));

    // The repeated failure was suppressed; the next batch is the
    // post-recovery removal, proving the stream survived the outage.
    let removals = stream.next().await.unwrap();
    assert_eq!(removals.len(), 2);
    assert!(removals.iter().all(|e| e.state == VolumeState::Removed));
}

#[tokio::test(start_paused = true)]
async fn failure_before_baseline_is_silent_and_nonfatal() {
    let provider = MockStorage::new(vec![
        Err(crate::storage::StorageError::Platform {
            message: "not ready".to_string(),
        }),
        Ok(vec![vol("sd0")]),
    ]);
    let mut stream = StorageWatcher::new(provider, POLL).into_stream();

    // First yielded batch is the removal after the exhausted mock goes
    // empty: the initial failure produced no events and the baseline
    // poll produced none either.
    let events = stream.next().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].state, VolumeState::Removed);
}

#[test]
fn watcher_reports_configured_interval() {
    let watcher = StorageWatcher::new(MockStorage::returning(vec![]), POLL);
    assert_eq!(watcher.interval(), POLL);
}
