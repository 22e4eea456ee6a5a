//! Tests for primary address selection.

use std::cell::Cell;

use super::select::*;
use super::{EntryAddress, InterfaceEntry, IpFamily};

// ============================================================================
// Test Fixtures
// ============================================================================

fn loopback_v4() -> InterfaceEntry {
    InterfaceEntry::with_ip("lo", "127.0.0.1".parse().unwrap())
}

fn loopback_v6() -> InterfaceEntry {
    InterfaceEntry::with_ip("lo", "::1".parse().unwrap())
}

fn eth0() -> InterfaceEntry {
    InterfaceEntry::with_ip("eth0", "10.0.0.5".parse().unwrap())
}

fn wlan0() -> InterfaceEntry {
    InterfaceEntry::with_ip("wlan0", "192.168.1.20".parse().unwrap())
}

fn link_layer(name: &str) -> InterfaceEntry {
    // AF_PACKET on Linux
    InterfaceEntry::new(name, Some(EntryAddress::Other(17)))
}

// ============================================================================
// Selection Tests
// ============================================================================

mod select_first {
    use super::*;

    #[test]
    fn empty_list_selects_nothing() {
        assert_eq!(select_first(Vec::<InterfaceEntry>::new()), None);
    }

    #[test]
    fn only_loopback_selects_nothing() {
        assert_eq!(select_first(vec![loopback_v4(), loopback_v6()]), None);
    }

    #[test]
    fn skips_loopback_anywhere_in_127_range() {
        let entries = vec![
            InterfaceEntry::with_ip("lo", "127.255.0.9".parse().unwrap()),
            eth0(),
        ];
        assert_eq!(select_first(entries).unwrap().interface, "eth0");
    }

    #[test]
    fn skips_entries_without_address() {
        let entries = vec![InterfaceEntry::new("tun0", None), eth0()];
        assert_eq!(select_first(entries).unwrap().interface, "eth0");
    }

    #[test]
    fn skips_non_ip_families() {
        let entries = vec![link_layer("lo"), link_layer("eth0"), wlan0()];
        let selection = select_first(entries).unwrap();

        assert_eq!(selection.interface, "wlan0");
        assert_eq!(selection.address, "192.168.1.20");
    }

    #[test]
    fn only_unusable_entries_selects_nothing() {
        let entries = vec![
            link_layer("eth0"),
            InterfaceEntry::new("tun0", None),
            loopback_v4(),
        ];
        assert_eq!(select_first(entries), None);
    }

    #[test]
    fn first_valid_entry_wins() {
        let selection = select_first(vec![loopback_v4(), eth0(), wlan0()]).unwrap();

        assert_eq!(
            selection,
            Selection {
                interface: "eth0".to_string(),
                family: IpFamily::V4,
                address: "10.0.0.5".to_string(),
            }
        );
    }

    #[test]
    fn stops_after_first_valid_entry() {
        let pulled = Cell::new(0);
        let entries = vec![loopback_v4(), eth0(), wlan0()];

        let selection = select_first(entries.into_iter().inspect(|_| pulled.set(pulled.get() + 1)));

        assert_eq!(selection.unwrap().interface, "eth0");
        assert_eq!(pulled.get(), 2, "the second valid entry must not be inspected");
    }

    #[test]
    fn keeps_os_order_not_sorted_order() {
        let selection = select_first(vec![wlan0(), eth0()]).unwrap();
        assert_eq!(selection.interface, "wlan0");
    }

    #[test]
    fn ipv6_can_win_over_later_ipv4() {
        let entries = vec![
            loopback_v6(),
            InterfaceEntry::with_ip("eth0", "fe80::1c2b:3cff:fe4d:5e6f".parse().unwrap()),
            wlan0(),
        ];
        let selection = select_first(entries).unwrap();

        assert_eq!(selection.family, IpFamily::V6);
        assert_eq!(selection.address, "fe80::1c2b:3cff:fe4d:5e6f");
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod render_address {
    use super::*;

    #[test]
    fn ipv4_is_dotted_decimal() {
        assert_eq!(render_address(&"192.0.2.5".parse().unwrap()), "192.0.2.5");
    }

    #[test]
    fn ipv6_is_compressed() {
        let ip = "2001:0db8:0000:0000:0000:0000:0000:0001".parse().unwrap();
        assert_eq!(render_address(&ip), "2001:db8::1");
    }

    #[test]
    fn ipv6_compresses_longest_zero_run() {
        let ip = "2001:db8:0:1:0:0:0:1".parse().unwrap();
        assert_eq!(render_address(&ip), "2001:db8:0:1::1");
    }

    #[test]
    fn selection_uses_rendered_form() {
        let entry = InterfaceEntry::with_ip("en0", "2001:db8:0:0:0:0:0:1".parse().unwrap());
        assert_eq!(select_first([entry]).unwrap().address, "2001:db8::1");
    }
}
