//! Connectivity gate over the primary wired adapter.

use super::AdapterProvider;

/// Returns true iff the host's primary wired adapter reports an
/// established link at call time.
///
/// A host without a wired adapter is "not connected" rather than an
/// error; callers skip network-dependent work gracefully. A provider
/// failure is likewise treated as "not connected" and logged at debug
/// level only, since the gate's answer is what matters to the caller.
///
/// The result is read fresh on every call and never cached; a stale read
/// is acceptable only because the check immediately precedes use.
pub fn is_primary_wired_link_up<P: AdapterProvider>(provider: &P) -> bool {
    match provider.primary_wired() {
        Ok(Some(adapter)) => adapter.status.is_up(),
        Ok(None) => false,
        Err(e) => {
            tracing::debug!("Primary wired adapter lookup failed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::testutil::MockProvider;
    use crate::network::{AdapterInfo, AdapterKind, OperStatus};

    #[test]
    fn up_wired_adapter_opens_the_gate() {
        let provider = MockProvider::returning(vec![vec![
            AdapterInfo::new("eth0", AdapterKind::Ethernet).with_status(OperStatus::Up),
        ]]);

        assert!(is_primary_wired_link_up(&provider));
    }

    #[test]
    fn down_wired_adapter_closes_the_gate() {
        let provider = MockProvider::returning(vec![vec![
            AdapterInfo::new("eth0", AdapterKind::Ethernet).with_status(OperStatus::Down),
        ]]);

        assert!(!is_primary_wired_link_up(&provider));
    }

    #[test]
    fn unknown_status_closes_the_gate() {
        let provider = MockProvider::returning(vec![vec![AdapterInfo::new(
            "eth0",
            AdapterKind::Ethernet,
        )]]);

        assert!(!is_primary_wired_link_up(&provider));
    }

    #[test]
    fn missing_wired_adapter_is_not_connected_not_an_error() {
        let provider = MockProvider::returning(vec![vec![
            AdapterInfo::new("lo", AdapterKind::Loopback).with_status(OperStatus::Up),
            AdapterInfo::new("wlan0", AdapterKind::Wireless).with_status(OperStatus::Up),
        ]]);

        assert!(!is_primary_wired_link_up(&provider));
    }

    #[test]
    fn empty_adapter_set_is_not_connected() {
        let provider = MockProvider::returning(vec![vec![]]);

        assert!(!is_primary_wired_link_up(&provider));
    }

    #[test]
    fn provider_error_is_not_connected() {
        let provider = MockProvider::failing("netlink down");

        assert!(!is_primary_wired_link_up(&provider));
    }
}
