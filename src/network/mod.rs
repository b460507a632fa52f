//! Network layer: adapter snapshots, connectivity gating, and the
//! inventory report.
//!
//! This module provides types and traits for:
//! - Representing network adapter snapshots ([`AdapterInfo`])
//! - Adapter type and link-state classification ([`AdapterKind`], [`OperStatus`])
//! - The capability-provider seam ([`AdapterProvider`])
//! - The connectivity gate ([`is_primary_wired_link_up`])
//! - Report rendering ([`describe_all`], [`AdapterReport`])
//! - The production provider ([`platform::SystemProvider`])

mod adapter;
mod gate;
mod inspector;
mod provider;

pub mod platform;

#[cfg(test)]
pub(crate) mod testutil;

pub use adapter::{AdapterInfo, AdapterKind, OperStatus};
pub use gate::is_primary_wired_link_up;
pub use inspector::{AdapterReport, describe_adapter, describe_all};
pub use provider::{AdapterProvider, ProviderError};
