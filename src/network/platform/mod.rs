//! Platform-backed adapter provider.
//!
//! Enumeration is cross-platform via the `network-interface` crate. On
//! Linux the snapshots are enriched with link state, MTU, and interface
//! type from `/sys/class/net`; elsewhere a name-based classification and
//! an address-presence link heuristic are used.

mod system;

pub use system::SystemProvider;
