//! System adapter provider backed by the `network-interface` crate.

use std::net::Ipv4Addr;

use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};

use crate::network::{AdapterInfo, AdapterKind, AdapterProvider, OperStatus, ProviderError};

/// Production implementation of [`AdapterProvider`] reading live OS state.
///
/// # Example
///
/// ```no_run
/// use netcheck::network::{AdapterProvider, platform::SystemProvider};
///
/// let provider = SystemProvider::new();
/// for adapter in provider.adapters().expect("enumeration failed") {
///     println!("{}: {}", adapter.name, adapter.status);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemProvider {
    // No configuration needed yet; struct allows future extension.
    _private: (),
}

impl SystemProvider {
    /// Creates a new system adapter provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterProvider for SystemProvider {
    fn adapters(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        let mut interfaces =
            NetworkInterface::show().map_err(|e| ProviderError::Enumeration {
                message: format!("{e:?}"),
            })?;

        interfaces.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));

        Ok(interfaces.iter().map(snapshot).collect())
    }
}

/// Builds one adapter snapshot from a raw interface entry.
fn snapshot(interface: &NetworkInterface) -> AdapterInfo {
    let name = interface.name.as_str();

    let ipv4_unicast: Vec<(Ipv4Addr, Ipv4Addr)> = interface
        .addr
        .iter()
        .filter_map(|addr| match addr {
            Addr::V4(v4) => Some((v4.ip, v4.netmask.unwrap_or(Ipv4Addr::UNSPECIFIED))),
            Addr::V6(_) => None,
        })
        .collect();

    let has_v4 = !ipv4_unicast.is_empty();
    let has_v6 = interface
        .addr
        .iter()
        .any(|addr| matches!(addr, Addr::V6(_)));

    let mac = interface
        .mac_addr
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(ToString::to_string);

    let mut adapter = AdapterInfo::new(name, classify(name))
        .with_status(link_status(name, has_v4 || has_v6))
        .with_families(has_v4, has_v6)
        .with_ipv4_unicast(ipv4_unicast);

    if let Some(mac) = mac.or_else(|| sys_attr(name, "address")) {
        adapter = adapter.with_mac(mac);
    }

    if let Some(mtu) = sys_attr(name, "mtu").and_then(|s| s.parse().ok()) {
        adapter = adapter.with_mtu(mtu);
    }

    adapter
}

/// Reads a `/sys/class/net/<name>/<attr>` attribute, trimmed.
#[cfg(target_os = "linux")]
fn sys_attr(name: &str, attr: &str) -> Option<String> {
    std::fs::read_to_string(format!("/sys/class/net/{name}/{attr}"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn sys_attr(_name: &str, _attr: &str) -> Option<String> {
    None
}

/// ARPHRD type codes from the Linux ABI (`if_arp.h`).
#[cfg(target_os = "linux")]
mod arphrd {
    pub const ETHER: u32 = 1;
    pub const TUNNEL: u32 = 768;
    pub const TUNNEL6: u32 = 769;
    pub const SIT: u32 = 776;
    pub const IPGRE: u32 = 778;
    pub const LOOPBACK: u32 = 772;
}

/// Classifies an interface by its `/sys` type code and wireless marker.
#[cfg(target_os = "linux")]
fn classify(name: &str) -> AdapterKind {
    let wireless = std::path::Path::new(&format!("/sys/class/net/{name}/wireless")).exists()
        || std::path::Path::new(&format!("/sys/class/net/{name}/phy80211")).exists();
    if wireless {
        return AdapterKind::Wireless;
    }

    match sys_attr(name, "type").and_then(|s| s.parse::<u32>().ok()) {
        Some(arphrd::ETHER) => AdapterKind::Ethernet,
        Some(arphrd::LOOPBACK) => AdapterKind::Loopback,
        Some(arphrd::TUNNEL | arphrd::TUNNEL6 | arphrd::SIT | arphrd::IPGRE) => AdapterKind::Tunnel,
        Some(code) => AdapterKind::Other(code),
        None => classify_by_name(name),
    }
}

#[cfg(not(target_os = "linux"))]
fn classify(name: &str) -> AdapterKind {
    classify_by_name(name)
}

/// Name-prefix fallback classification for hosts without `/sys`.
fn classify_by_name(name: &str) -> AdapterKind {
    let lower = name.to_ascii_lowercase();
    if lower == "lo" || lower.starts_with("lo0") {
        AdapterKind::Loopback
    } else if lower.starts_with("wl") || lower.starts_with("wifi") || lower.starts_with("ath") {
        AdapterKind::Wireless
    } else if lower.starts_with("tun")
        || lower.starts_with("tap")
        || lower.starts_with("utun")
        || lower.starts_with("gre")
        || lower.starts_with("ipip")
        || lower.starts_with("sit")
    {
        AdapterKind::Tunnel
    } else if lower.starts_with("eth") || lower.starts_with("en") {
        AdapterKind::Ethernet
    } else {
        AdapterKind::Other(0)
    }
}

/// Determines the link status for an interface.
///
/// Linux exposes `operstate`; elsewhere, address presence stands in for
/// an established link.
#[cfg(target_os = "linux")]
fn link_status(name: &str, has_addresses: bool) -> OperStatus {
    match sys_attr(name, "operstate").as_deref() {
        Some("up") => OperStatus::Up,
        Some("down") => OperStatus::Down,
        Some("dormant") => OperStatus::Dormant,
        Some("notpresent") => OperStatus::NotPresent,
        Some("lowerlayerdown") => OperStatus::LowerLayerDown,
        Some("testing") => OperStatus::Testing,
        // Loopback commonly reports "unknown" while fully functional.
        Some("unknown") | None => {
            if has_addresses {
                OperStatus::Up
            } else {
                OperStatus::Unknown
            }
        }
        Some(_) => OperStatus::Unknown,
    }
}

#[cfg(not(target_os = "linux"))]
fn link_status(_name: &str, has_addresses: bool) -> OperStatus {
    if has_addresses {
        OperStatus::Up
    } else {
        OperStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_name_recognizes_common_prefixes() {
        assert_eq!(classify_by_name("lo"), AdapterKind::Loopback);
        assert_eq!(classify_by_name("eth0"), AdapterKind::Ethernet);
        assert_eq!(classify_by_name("enp3s0"), AdapterKind::Ethernet);
        assert_eq!(classify_by_name("wlan0"), AdapterKind::Wireless);
        assert_eq!(classify_by_name("wlp2s0"), AdapterKind::Wireless);
        assert_eq!(classify_by_name("tun0"), AdapterKind::Tunnel);
        assert_eq!(classify_by_name("utun3"), AdapterKind::Tunnel);
        assert_eq!(classify_by_name("docker0"), AdapterKind::Other(0));
    }

    #[test]
    fn provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemProvider>();
    }

    #[test]
    fn enumeration_succeeds_on_this_host() {
        // Every supported host has at least a loopback interface.
        let provider = SystemProvider::new();
        let adapters = provider.adapters().expect("enumeration failed");
        assert!(!adapters.is_empty());
    }
}
