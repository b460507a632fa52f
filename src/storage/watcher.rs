//! Poll-driven storage attach/detach notification stream.
//!
//! The notification channel from the storage capability provider is
//! realized as a polling diff: the watcher periodically lists removable
//! volumes and yields [`StorageEvent`] batches for everything that
//! changed since the previous listing.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::time::{Interval, interval};
use tokio_stream::Stream;

use crate::time::{Clock, SystemClock};

use super::volume::diff;
use super::{StorageEvent, StorageProvider, VolumeInfo, VolumeState};

/// Poll-based storage watcher configuration.
///
/// # Type Parameters
///
/// * `P` - The [`StorageProvider`] implementation to poll
/// * `C` - The [`Clock`] implementation for event timestamps
///   (defaults to [`SystemClock`])
pub struct StorageWatcher<P, C = SystemClock> {
    provider: P,
    clock: C,
    interval: Duration,
}

impl<P> StorageWatcher<P, SystemClock>
where
    P: StorageProvider,
{
    /// Creates a new watcher with the system clock.
    #[must_use]
    pub const fn new(provider: P, interval: Duration) -> Self {
        Self::with_clock(provider, SystemClock, interval)
    }
}

impl<P, C> StorageWatcher<P, C>
where
    P: StorageProvider,
    C: Clock,
{
    /// Creates a new watcher with a custom clock.
    ///
    /// This constructor allows injecting a mock clock for testing.
    #[must_use]
    pub const fn with_clock(provider: P, clock: C, interval: Duration) -> Self {
        Self {
            provider,
            clock,
            interval,
        }
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Converts this watcher into a stream of storage event batches.
    ///
    /// The stream never terminates on its own; consume it under a
    /// shutdown signal to stop gracefully.
    #[must_use]
    pub fn into_stream(self) -> WatchStream<P, C> {
        WatchStream {
            provider: self.provider,
            clock: self.clock,
            interval: interval(self.interval),
            prev: None,
            error_emitted: false,
        }
    }
}

/// A stream of storage event batches produced by polling.
///
/// The first successful listing establishes a baseline and emits
/// nothing; subsequent listings yield insert/remove diffs. A failed
/// listing after a baseline yields one [`VolumeState::Error`] event per
/// known volume exactly once, then stays quiet until the provider
/// recovers — a failed poll never terminates the stream.
pub struct WatchStream<P, C> {
    provider: P,
    clock: C,
    interval: Interval,
    /// Previous listing, used as the diff baseline.
    prev: Option<Vec<VolumeInfo>>,
    /// Whether the current provider outage has already been reported.
    error_emitted: bool,
}

impl<P, C> WatchStream<P, C>
where
    P: StorageProvider,
    C: Clock,
{
    /// Performs a single poll and returns events to emit, if any.
    fn poll_once(&mut self) -> Option<Vec<StorageEvent>> {
        let at = self.clock.now();

        match self.provider.removable_volumes() {
            Ok(current) => {
                self.error_emitted = false;
                let events = self
                    .prev
                    .as_ref()
                    .map(|prev| diff(prev, &current, at));
                self.prev = Some(current);
                events.filter(|e| !e.is_empty())
            }
            Err(_) => {
                if self.error_emitted {
                    return None;
                }
                let known = self.prev.as_ref()?;
                self.error_emitted = true;
                let events: Vec<StorageEvent> = known
                    .iter()
                    .map(|volume| StorageEvent {
                        volume: volume.clone(),
                        state: VolumeState::Error,
                        at,
                    })
                    .collect();
                (!events.is_empty()).then_some(events)
            }
        }
    }
}

impl<P, C> Stream for WatchStream<P, C>
where
    P: StorageProvider + Unpin,
    C: Clock + Unpin,
{
    type Item = Vec<StorageEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            // Poll the interval timer - registers the waker for the next
            // tick when Pending.
            if Pin::new(&mut self.interval).poll_tick(cx).is_pending() {
                return Poll::Pending;
            }

            if let Some(events) = self.poll_once() {
                return Poll::Ready(Some(events));
            }
            // Nothing to emit - loop back to re-register the waker.
        }
    }
}
