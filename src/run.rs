//! Diagnostic execution logic.
//!
//! This module contains the async flow that runs the storage probe, the
//! connectivity-gated network diagnostics, and the optional storage
//! watch loop.

use std::time::Duration;

use thiserror::Error;
use tokio::signal;
use tokio_stream::StreamExt;

use netcheck::config::{ValidatedConfig, defaults};
use netcheck::fetch::{FetchOutcome, Fetcher, HttpTransport, ReqwestTransport};
use netcheck::network::platform::SystemProvider;
use netcheck::network::{
    AdapterProvider, AdapterReport, describe_all, is_primary_wired_link_up,
};
use netcheck::storage::{MountScanProvider, StorageProvider, StorageWatcher, write_marker};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Unexpected stream termination.
    #[error("Storage watch stream terminated unexpectedly")]
    WatchTerminated,
}

/// Executes the diagnostic run.
///
/// This function:
/// 1. Probes the first removable volume with a marker file
/// 2. Checks the primary wired link; when up, prints the adapter
///    inventory and performs the echo round-trip
/// 3. In watch mode, keeps reporting storage events until a shutdown
///    signal (Ctrl+C / SIGTERM)
///
/// Every diagnostic failure is converted to a log line; the run itself
/// only fails if the watch stream dies.
///
/// # Errors
///
/// Returns an error if the storage watch stream terminates unexpectedly.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let network = SystemProvider::new();
    let storage = create_storage_provider(&config);
    let transport = ReqwestTransport::new();

    // The storage probe has no ordering dependency on the network
    // diagnostics and runs regardless of link state.
    run_storage_probe(&storage, &config).await;

    run_network_diagnostics(&network, transport, &config).await;

    if config.watch {
        watch_storage_events(storage, config.poll_interval).await
    } else {
        Ok(())
    }
}

/// Creates the storage provider from configuration.
fn create_storage_provider(config: &ValidatedConfig) -> MountScanProvider {
    config
        .storage_roots
        .clone()
        .map_or_else(MountScanProvider::default, MountScanProvider::new)
}

/// Writes the marker file and reports the result.
async fn run_storage_probe<S: StorageProvider>(storage: &S, config: &ValidatedConfig) {
    match write_marker(storage, &config.marker_file, defaults::MARKER_CONTENT).await {
        Ok(Some(marker)) => {
            tracing::info!(
                "Marker file {} written ({} bytes)",
                marker.path.display(),
                marker.len,
            );
        }
        Ok(None) => {
            tracing::info!(
                "No removable storage detected; check that a volume is inserted and mounted"
            );
        }
        Err(e) => {
            tracing::warn!("Storage probe failed: {e}");
        }
    }
}

/// Runs the connectivity-gated part of the diagnostics.
///
/// The gate strictly precedes the fetch: a downed link skips both the
/// inventory and the round-trip with a single warning.
async fn run_network_diagnostics<P, T>(network: &P, transport: T, config: &ValidatedConfig)
where
    P: AdapterProvider,
    T: HttpTransport,
{
    if !is_primary_wired_link_up(network) {
        tracing::warn!("Primary wired link is down; skipping network diagnostics");
        return;
    }

    report_adapters(network);

    if config.skip_fetch {
        tracing::info!("Fetch disabled; skipping connectivity round-trip");
        return;
    }

    let fetcher = Fetcher::new(transport).with_timeout(config.fetch_timeout);

    tracing::info!("Requesting {}", config.url);
    match fetcher.fetch(&config.url).await {
        FetchOutcome::Success(body) => tracing::info!("{body}"),
        FetchOutcome::Timeout => tracing::warn!("Request timed out"),
        FetchOutcome::Failure(message) => tracing::warn!("Request failed: {message}"),
    }
}

/// Renders and logs the adapter inventory.
fn report_adapters<P: AdapterProvider>(network: &P) {
    let adapters = match network.adapters() {
        Ok(adapters) => adapters,
        Err(e) => {
            tracing::warn!("Adapter enumeration failed: {e}");
            return;
        }
    };

    match describe_all(&adapters) {
        AdapterReport::NoAdapters => tracing::warn!("No adapters available"),
        AdapterReport::Report(lines) => {
            for line in lines {
                tracing::info!("{line}");
            }
        }
    }
}

/// Consumes storage events until a shutdown signal arrives.
///
/// The observer is stateless: each batch is converted to log lines and
/// dropped, so the handler is safe to run concurrently with anything.
async fn watch_storage_events<S>(storage: S, poll_interval: Duration) -> Result<(), RunError>
where
    S: StorageProvider + Unpin,
{
    tracing::info!(
        "Watching storage events (poll every {}s); Ctrl+C to stop",
        poll_interval.as_secs(),
    );

    let mut stream = StorageWatcher::new(storage, poll_interval).into_stream();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            events = stream.next() => {
                match events {
                    Some(events) => {
                        for event in events {
                            tracing::info!(
                                "Storage event: {} is {}",
                                event.volume.root.display(),
                                event.state,
                            );
                        }
                    }
                    None => {
                        // Stream ended unexpectedly
                        return Err(RunError::WatchTerminated);
                    }
                }
            }
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
