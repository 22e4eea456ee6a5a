//! Primary address selection.
//!
//! The selector walks interface entries in the order the operating system
//! reported them and keeps the first usable one:
//!
//! - entries without an address are skipped
//! - non-IP families (link-layer, packet, ...) are skipped
//! - loopback addresses are skipped (see [`is_loopback`](super::is_loopback))
//!
//! There is no ranking. On a multi-homed host the result depends on the OS
//! enumeration order, which is not sorted here.

use std::net::IpAddr;

use serde::Serialize;

use super::{EntryAddress, InterfaceEntry, IpFamily};

/// The chosen interface/address pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Name of the interface owning the address.
    pub interface: String,
    /// Family of the selected address.
    pub family: IpFamily,
    /// Canonical text form of the address.
    pub address: String,
}

/// Selects the first non-loopback IP entry.
///
/// Consumes the iterator lazily: once an entry qualifies, no further entries
/// are pulled.
///
/// # Examples
///
/// ```
/// use host_ident::network::{InterfaceEntry, IpFamily, select_first};
///
/// let entries = vec![
///     InterfaceEntry::with_ip("lo", "127.0.0.1".parse().unwrap()),
///     InterfaceEntry::with_ip("eth0", "192.0.2.5".parse().unwrap()),
/// ];
///
/// let selection = select_first(entries).unwrap();
/// assert_eq!(selection.interface, "eth0");
/// assert_eq!(selection.family, IpFamily::V4);
/// assert_eq!(selection.address, "192.0.2.5");
/// ```
pub fn select_first<I>(entries: I) -> Option<Selection>
where
    I: IntoIterator<Item = InterfaceEntry>,
{
    entries.into_iter().find_map(qualify)
}

/// Renders an address in canonical text form.
///
/// Dotted-decimal for IPv4, compressed colon-hex (RFC 5952) for IPv6.
#[must_use]
pub fn render_address(ip: &IpAddr) -> String {
    ip.to_string()
}

fn qualify(entry: InterfaceEntry) -> Option<Selection> {
    let (address, ip) = match entry.address {
        Some(address @ EntryAddress::Ip(ip)) => (address, ip),
        Some(EntryAddress::Other(family)) => {
            tracing::trace!(interface = %entry.name, family, "Skipping non-IP address");
            return None;
        }
        None => {
            tracing::trace!(interface = %entry.name, "Skipping entry without address");
            return None;
        }
    };

    if address.is_loopback() {
        tracing::trace!(interface = %entry.name, %ip, "Skipping loopback address");
        return None;
    }

    let selection = Selection {
        family: IpFamily::of(&ip),
        address: render_address(&ip),
        interface: entry.name,
    };
    tracing::debug!(
        interface = %selection.interface,
        family = %selection.family,
        address = %selection.address,
        "Selected primary address"
    );
    Some(selection)
}
