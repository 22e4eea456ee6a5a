//! Windows interface enumeration and MAC lookup using `GetAdaptersAddresses`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GET_ADAPTERS_ADDRESSES_FLAGS, GetAdaptersAddresses, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR, SOCKADDR_IN, SOCKADDR_IN6,
};

use crate::network::{
    EntryAddress, FetchError, HardwareAddressLookup, InterfaceEntry, InterfaceFetcher,
    LookupError, MacAddress,
};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`InterfaceFetcher`] using `GetAdaptersAddresses`.
///
/// Each unicast address becomes one [`InterfaceEntry`] named after the
/// adapter's friendly name. Adapters without unicast addresses yield a single
/// entry with no address.
#[derive(Debug, Clone, Default)]
pub struct WindowsFetcher {
    _private: (),
}

impl WindowsFetcher {
    /// Creates a new Windows interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for WindowsFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceEntry>, FetchError> {
        let buffer = get_adapter_addresses()?;

        let mut entries = Vec::new();
        for adapter in adapters(&buffer) {
            let Some(name) = friendly_name(adapter) else {
                continue;
            };
            collect_entries(adapter, &name, &mut entries);
        }

        tracing::debug!(count = entries.len(), "Enumerated interface addresses");
        Ok(entries)
    }
}

/// Windows implementation of [`HardwareAddressLookup`].
///
/// Looks the adapter up by friendly name, matching the names produced by
/// [`WindowsFetcher`].
#[derive(Debug, Clone, Default)]
pub struct WindowsLookup {
    _private: (),
}

impl WindowsLookup {
    /// Creates a new Windows hardware-address lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl HardwareAddressLookup for WindowsLookup {
    fn lookup(&self, interface: &str) -> Result<MacAddress, LookupError> {
        let buffer = get_adapter_addresses()?;

        let adapter = adapters(&buffer)
            .find(|adapter| friendly_name(adapter).as_deref() == Some(interface))
            .ok_or_else(|| LookupError::NotFound {
                name: interface.to_string(),
            })?;

        physical_address(adapter).ok_or_else(|| LookupError::NoHardwareAddress {
            name: interface.to_string(),
        })
    }
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, windows::core::Error> {
    // Flags to skip data we don't need (anycast, multicast, DNS servers)
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, retrying once with a larger buffer.
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> windows::core::Result<()> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)));
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)));
    }

    Ok(())
}

/// Iterates the adapter linked list stored in `buffer`.
#[allow(clippy::cast_ptr_alignment)]
fn adapters(buffer: &[u8]) -> impl Iterator<Item = &IP_ADAPTER_ADDRESSES_LH> {
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer whose first
    // bytes hold the head of the list. Every node lives inside `buffer`.
    let head = unsafe { buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>().as_ref() };
    std::iter::successors(head, |adapter| unsafe { adapter.Next.as_ref() })
}

fn friendly_name(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<String> {
    // SAFETY: FriendlyName is a NUL-terminated wide string inside the buffer.
    unsafe { adapter.FriendlyName.to_string().ok() }
}

fn physical_address(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<MacAddress> {
    if adapter.PhysicalAddressLength != 6 {
        return None;
    }
    MacAddress::from_prefix(&adapter.PhysicalAddress)
}

/// Appends one entry per unicast address, preserving the API's order.
fn collect_entries(
    adapter: &IP_ADAPTER_ADDRESSES_LH,
    name: &str,
    entries: &mut Vec<InterfaceEntry>,
) {
    let before = entries.len();
    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while let Some(addr_entry) = unsafe { unicast.as_ref() } {
        // SAFETY: lpSockaddr is either null or points to a SOCKADDR.
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            entries.push(InterfaceEntry::new(name, Some(map_sockaddr(sockaddr))));
        }
        unicast = addr_entry.Next;
    }

    if entries.len() == before {
        entries.push(InterfaceEntry::new(name, None));
    }
}

/// Converts a `SOCKADDR` into an [`EntryAddress`].
#[allow(clippy::cast_ptr_alignment)]
fn map_sockaddr(sockaddr: &SOCKADDR) -> EntryAddress {
    match sockaddr.sa_family {
        f if f == AF_INET => {
            // SAFETY: We verified the family is AF_INET, so this is a valid cast.
            let sockaddr_in =
                unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
            // SAFETY: sin_addr contains the IPv4 address bytes in network order.
            let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
            EntryAddress::Ip(IpAddr::V4(Ipv4Addr::new(
                octets.s_b1,
                octets.s_b2,
                octets.s_b3,
                octets.s_b4,
            )))
        }
        f if f == AF_INET6 => {
            // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
            let sockaddr_in6 =
                unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
            // SAFETY: We verified this is an IPv6 address, so the union field is valid.
            let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
            EntryAddress::Ip(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        other => EntryAddress::Other(i32::from(other.0)),
    }
}
