//! Unix interface enumeration using `getifaddrs`.

use std::net::{IpAddr, SocketAddrV4, SocketAddrV6};

use nix::ifaddrs::{InterfaceAddress, getifaddrs};
use nix::sys::socket::{SockaddrLike, SockaddrStorage};

use crate::network::{EntryAddress, FetchError, InterfaceEntry, InterfaceFetcher};

/// Unix implementation of [`InterfaceFetcher`] using `getifaddrs`.
///
/// Every `ifaddrs` node becomes one [`InterfaceEntry`], in list order.
/// Link-layer and other non-IP nodes are kept as [`EntryAddress::Other`].
///
/// # Example
///
/// ```no_run
/// use host_ident::network::{InterfaceFetcher, platform::UnixFetcher};
///
/// let fetcher = UnixFetcher::new();
/// for entry in fetcher.fetch().expect("Failed to enumerate interfaces") {
///     println!("{}: {:?}", entry.name, entry.address);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnixFetcher {
    _private: (),
}

impl UnixFetcher {
    /// Creates a new Unix interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for UnixFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceEntry>, FetchError> {
        let entries: Vec<InterfaceEntry> = getifaddrs()?.map(parse_ifaddr).collect();
        tracing::debug!(count = entries.len(), "Enumerated interface addresses");
        Ok(entries)
    }
}

fn parse_ifaddr(ifaddr: InterfaceAddress) -> InterfaceEntry {
    let address = ifaddr.address.as_ref().map(map_sockaddr);
    InterfaceEntry::new(ifaddr.interface_name, address)
}

/// Maps a socket address to an [`EntryAddress`], keeping the family code of
/// anything that is not IPv4 or IPv6.
pub(super) fn map_sockaddr(storage: &SockaddrStorage) -> EntryAddress {
    if let Some(v4) = storage.as_sockaddr_in() {
        return EntryAddress::Ip(IpAddr::V4(*SocketAddrV4::from(*v4).ip()));
    }
    if let Some(v6) = storage.as_sockaddr_in6() {
        return EntryAddress::Ip(IpAddr::V6(*SocketAddrV6::from(*v6).ip()));
    }
    EntryAddress::Other(storage.family().map_or(libc::AF_UNSPEC, |family| family as i32))
}
