//! Tests for the probe module.

use std::cell::Cell;
use std::collections::HashMap;

use super::*;
use crate::network::{InterfaceEntry, IpFamily, LookupError, MacAddress};

// ============================================================================
// Mocks
// ============================================================================

struct MockHostname(Option<&'static str>);

impl HostnameResolver for MockHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| std::io::Error::other("hostname unavailable").into())
    }
}

struct MockFetcher {
    entries: Option<Vec<InterfaceEntry>>,
    calls: Cell<usize>,
}

impl MockFetcher {
    fn returning(entries: Vec<InterfaceEntry>) -> Self {
        Self {
            entries: Some(entries),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            entries: None,
            calls: Cell::new(0),
        }
    }
}

impl InterfaceFetcher for MockFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceEntry>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.entries.clone().ok_or_else(|| FetchError::Platform {
            message: "getifaddrs failed".to_string(),
        })
    }
}

#[derive(Default)]
struct MockLookup {
    table: HashMap<String, MacAddress>,
    queried: Cell<usize>,
}

impl MockLookup {
    fn with(name: &str, octets: [u8; 6]) -> Self {
        Self {
            table: HashMap::from([(name.to_string(), MacAddress::new(octets))]),
            queried: Cell::new(0),
        }
    }
}

impl HardwareAddressLookup for MockLookup {
    fn lookup(&self, interface: &str) -> Result<MacAddress, LookupError> {
        self.queried.set(self.queried.get() + 1);
        self.table
            .get(interface)
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                name: interface.to_string(),
            })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

const ETH0_MAC: [u8; 6] = [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e];

fn loopback() -> InterfaceEntry {
    InterfaceEntry::with_ip("lo", "127.0.0.1".parse().unwrap())
}

fn eth0() -> InterfaceEntry {
    InterfaceEntry::with_ip("eth0", "10.0.0.5".parse().unwrap())
}

// ============================================================================
// Tests
// ============================================================================

mod run {
    use super::*;

    #[test]
    fn end_to_end_report_is_exact() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![loopback(), eth0()]),
            MockLookup::with("eth0", ETH0_MAC),
        );

        let identity = probe.run().unwrap();

        assert_eq!(
            identity.to_string(),
            "Network name: host1\nIP address (IPv4): 10.0.0.5\nMAC address: 00:1a:2b:3c:4d:5e"
        );
    }

    #[test]
    fn lookup_failure_still_succeeds_with_unavailable() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![eth0()]),
            MockLookup::default(),
        );

        let identity = probe.run().unwrap();

        assert_eq!(identity.mac, None);
        assert!(identity.to_string().contains("MAC address: unavailable"));
    }

    #[test]
    fn looks_up_the_selected_interface() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![
                InterfaceEntry::with_ip("wlan0", "192.168.1.20".parse().unwrap()),
                eth0(),
            ]),
            MockLookup::with("wlan0", [0x02, 0, 0, 0, 0, 0x01]),
        );

        let identity = probe.run().unwrap();

        assert_eq!(identity.selection.interface, "wlan0");
        assert_eq!(identity.mac, Some(MacAddress::new([0x02, 0, 0, 0, 0, 0x01])));
        assert_eq!(probe.lookup.queried.get(), 1);
    }

    #[test]
    fn ipv6_selection_is_tagged() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![
                InterfaceEntry::with_ip("lo", "::1".parse().unwrap()),
                InterfaceEntry::with_ip("eth0", "2001:db8:0:0:0:0:0:7".parse().unwrap()),
            ]),
            MockLookup::with("eth0", ETH0_MAC),
        );

        let identity = probe.run().unwrap();

        assert_eq!(identity.selection.family, IpFamily::V6);
        assert!(identity.to_string().contains("IP address (IPv6): 2001:db8::7"));
    }

    #[test]
    fn only_loopback_is_no_address() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![loopback()]),
            MockLookup::default(),
        );

        assert!(matches!(probe.run(), Err(ProbeError::NoAddress)));
        assert_eq!(probe.lookup.queried.get(), 0);
    }

    #[test]
    fn empty_list_is_no_address() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![]),
            MockLookup::default(),
        );

        assert!(matches!(probe.run(), Err(ProbeError::NoAddress)));
    }

    #[test]
    fn hostname_failure_is_fatal_and_stops_early() {
        let probe = Probe::new(
            MockHostname(None),
            MockFetcher::returning(vec![eth0()]),
            MockLookup::default(),
        );

        let error = probe.run().unwrap_err();

        assert!(matches!(error, ProbeError::Hostname(_)));
        assert_eq!(error.to_string(), "Failed to query hostname: hostname unavailable");
        assert_eq!(probe.fetcher.calls.get(), 0);
    }

    #[test]
    fn interface_list_failure_is_fatal() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::failing(),
            MockLookup::default(),
        );

        let error = probe.run().unwrap_err();

        assert!(matches!(error, ProbeError::InterfaceList(_)));
        assert!(error.to_string().contains("getifaddrs failed"));
        assert_eq!(probe.lookup.queried.get(), 0);
    }

    #[test]
    fn each_query_runs_once() {
        let probe = Probe::new(
            MockHostname(Some("host1")),
            MockFetcher::returning(vec![eth0()]),
            MockLookup::default(),
        );

        let _ = probe.run();

        assert_eq!(probe.fetcher.calls.get(), 1);
        assert_eq!(probe.lookup.queried.get(), 1);
    }
}

mod probe_error {
    use super::*;

    #[test]
    fn no_address_displays_message() {
        assert_eq!(
            ProbeError::NoAddress.to_string(),
            "No suitable non-loopback IP address found"
        );
    }

    #[test]
    fn debug_format_works() {
        let debug_str = format!("{:?}", ProbeError::NoAddress);
        assert!(debug_str.contains("NoAddress"));
    }
}

// Integration test: runs against the real OS. Hosts without a non-loopback
// address are valid, so only the error kind is checked there.
#[test]
fn system_probe_runs() {
    match Probe::system().run() {
        Ok(identity) => {
            assert!(!identity.hostname.is_empty());
            assert!(!identity.selection.interface.is_empty());
        }
        Err(error) => assert!(matches!(error, ProbeError::NoAddress), "{error}"),
    }
}
