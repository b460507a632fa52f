//! Adapter inventory report rendering.
//!
//! Pure read/format pass over adapter snapshots: no mutation, safe to
//! call repeatedly and concurrently. The orchestrator logs the rendered
//! lines; rendering and logging stay separate so the report is testable.

use super::{AdapterInfo, AdapterKind};

/// Column the value separator is aligned to in dotted report lines.
const VALUE_COLUMN: usize = 40;

/// Result of rendering the adapter inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterReport {
    /// No adapters were discovered. The caller logs a single warning.
    NoAdapters,
    /// One block of lines per adapter, in enumeration order.
    Report(Vec<String>),
}

/// Renders the inventory report for all adapters.
///
/// Zero adapters is not an error: it yields [`AdapterReport::NoAdapters`]
/// so the caller can emit exactly one warning and move on.
#[must_use]
pub fn describe_all(adapters: &[AdapterInfo]) -> AdapterReport {
    if adapters.is_empty() {
        return AdapterReport::NoAdapters;
    }

    let mut lines = Vec::new();
    for adapter in adapters {
        lines.push(String::new());
        lines.extend(describe_adapter(adapter));
    }
    AdapterReport::Report(lines)
}

/// Renders the report block for a single adapter.
///
/// Field order matches the bring-up log format: description header,
/// name, type, hardware address, status, address-family label, then MTU
/// (IPv4-capable adapters only) and the IPv4 unicast pass (Ethernet and
/// Wireless only — other kinds are reported without addresses even when
/// they carry IPv4).
#[must_use]
pub fn describe_adapter(adapter: &AdapterInfo) -> Vec<String> {
    let mut lines = vec![
        adapter.description.clone(),
        "=".repeat(adapter.description.len()),
        format!("  Adapter name: {}", adapter.name),
        field("Interface type", &adapter.kind),
        field("Physical Address", &adapter.mac.as_deref().unwrap_or("")),
        field("Operational status", &adapter.status),
        field("IP version", &adapter.ip_version_label()),
    ];

    if adapter.supports_ipv4 {
        if let Some(mtu) = adapter.mtu {
            lines.push(field("MTU", &mtu));
        }
    }

    if matches!(adapter.kind, AdapterKind::Ethernet | AdapterKind::Wireless) {
        for (address, mask) in &adapter.ipv4_unicast {
            lines.push(field("IP address", address));
            lines.push(field("Subnet mask", mask));
        }
    }

    lines
}

/// Formats one dotted report line, aligning the separator column.
fn field(label: &str, value: &dyn std::fmt::Display) -> String {
    let dots = ".".repeat(VALUE_COLUMN.saturating_sub(label.len()));
    format!("  {label} {dots} : {value}")
}
