//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default echo endpoint for the connectivity round-trip.
pub const ECHO_URL: &str = "https://postman-echo.com/get?foo1=bar1&foo2=bar2";

/// Default total request timeout in seconds (5 minutes).
pub const FETCH_TIMEOUT_SECS: u64 = 300;

/// Default marker file name written to the first removable volume.
pub const MARKER_FILE: &str = "bringup_marker.txt";

/// Content of the marker file.
pub const MARKER_CONTENT: &str = "Hello from netcheck!";

/// Default storage poll interval in seconds.
pub const STORAGE_POLL_INTERVAL_SECS: u64 = 2;

/// Default fetch timeout as Duration.
#[must_use]
pub const fn fetch_timeout() -> Duration {
    Duration::from_secs(FETCH_TIMEOUT_SECS)
}

/// Default storage poll interval as Duration.
#[must_use]
pub const fn storage_poll_interval() -> Duration {
    Duration::from_secs(STORAGE_POLL_INTERVAL_SECS)
}
