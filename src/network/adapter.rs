//! Core network types for adapter representation.

use std::fmt;
use std::net::Ipv4Addr;

/// Operational status of a network adapter.
///
/// Mirrors the link states reported by the operating system (on Linux,
/// the `operstate` values from `/sys/class/net`). Only [`Self::Up`]
/// permits downstream network activity; everything else is treated as
/// "not connected" by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperStatus {
    /// Link is established and passing traffic.
    Up,
    /// Link is administratively or physically down.
    Down,
    /// Interface is waiting for an external event (e.g. 802.1X).
    Dormant,
    /// Hardware is not present.
    NotPresent,
    /// A lower layer (e.g. the carrier) is down.
    LowerLayerDown,
    /// Interface is in a testing mode.
    Testing,
    /// Status could not be determined.
    Unknown,
}

impl OperStatus {
    /// Returns true if the adapter reports an established link.
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

impl fmt::Display for OperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Dormant => "Dormant",
            Self::NotPresent => "NotPresent",
            Self::LowerLayerDown => "LowerLayerDown",
            Self::Testing => "Testing",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Network adapter type classification.
///
/// The inspector limits its IPv4 unicast pass to [`Self::Ethernet`] and
/// [`Self::Wireless`]; other kinds are reported without addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Physical Ethernet adapter.
    Ethernet,
    /// Wireless (Wi-Fi) adapter.
    Wireless,
    /// Loopback adapter (localhost).
    Loopback,
    /// Tunnel adapter (VPN, GRE, IP-in-IP, etc.).
    Tunnel,
    /// Unknown or other adapter type, preserving the original type code for debugging.
    Other(u32),
}

impl AdapterKind {
    /// Returns true if this is a loopback adapter.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        matches!(self, Self::Loopback)
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethernet => f.write_str("Ethernet"),
            Self::Wireless => f.write_str("Wireless"),
            Self::Loopback => f.write_str("Loopback"),
            Self::Tunnel => f.write_str("Tunnel"),
            Self::Other(code) => write!(f, "Other({code})"),
        }
    }
}

/// A snapshot of a single network adapter at a point in time.
///
/// Created fresh on each enumeration, never mutated, and discarded after
/// the report is rendered. This is a read-only view over live OS state,
/// not a tracked entity.
///
/// # Construction
///
/// [`AdapterInfo::new`] fills conservative defaults (status unknown, no
/// addresses, no MTU); the `with_*` builders layer on whatever the
/// provider could determine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterInfo {
    /// The interface name (e.g., "eth0", "wlan0").
    pub name: String,
    /// A human-readable description. Falls back to the name on platforms
    /// that do not distinguish the two.
    pub description: String,
    /// The type of adapter.
    pub kind: AdapterKind,
    /// Formatted hardware (MAC) address, if available.
    pub mac: Option<String>,
    /// Operational link status.
    pub status: OperStatus,
    /// Whether the adapter supports IPv4.
    pub supports_ipv4: bool,
    /// Whether the adapter supports IPv6.
    pub supports_ipv6: bool,
    /// Maximum transmission unit. Reported only for IPv4-capable adapters.
    pub mtu: Option<u32>,
    /// Unicast IPv4 (address, subnet mask) pairs, in enumeration order.
    pub ipv4_unicast: Vec<(Ipv4Addr, Ipv4Addr)>,
}

impl AdapterInfo {
    /// Creates a new adapter snapshot with conservative defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AdapterKind) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            kind,
            mac: None,
            status: OperStatus::Unknown,
            supports_ipv4: false,
            supports_ipv6: false,
            mtu: None,
            ipv4_unicast: Vec::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the formatted hardware address.
    #[must_use]
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = Some(mac.into());
        self
    }

    /// Sets the operational status.
    #[must_use]
    pub const fn with_status(mut self, status: OperStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the supported address families.
    #[must_use]
    pub const fn with_families(mut self, ipv4: bool, ipv6: bool) -> Self {
        self.supports_ipv4 = ipv4;
        self.supports_ipv6 = ipv6;
        self
    }

    /// Sets the MTU.
    #[must_use]
    pub const fn with_mtu(mut self, mtu: u32) -> Self {
        self.mtu = Some(mtu);
        self
    }

    /// Sets the unicast IPv4 (address, mask) pairs.
    #[must_use]
    pub fn with_ipv4_unicast(mut self, pairs: Vec<(Ipv4Addr, Ipv4Addr)>) -> Self {
        self.ipv4_unicast = pairs;
        self
    }

    /// Renders the supported-address-family label.
    ///
    /// IPv4 and IPv6 support are tested independently and present labels
    /// are concatenated space-separated ("IPv4 IPv6"). An adapter
    /// supporting neither family yields the empty string; this is
    /// intentional and not an error.
    #[must_use]
    pub fn ip_version_label(&self) -> String {
        let mut label = String::new();
        if self.supports_ipv4 {
            label.push_str("IPv4");
        }
        if self.supports_ipv6 {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str("IPv6");
        }
        label
    }
}
