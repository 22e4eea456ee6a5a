//! macOS / BSD hardware-address lookup using `AF_LINK` entries.

use nix::ifaddrs::getifaddrs;
use nix::sys::socket::{LinkAddr, SockaddrStorage};

use crate::network::{HardwareAddressLookup, LookupError, MacAddress};

/// Implementation of [`HardwareAddressLookup`] for systems without
/// `SIOCGIFHWADDR`.
///
/// `getifaddrs` reports one `AF_LINK` node per interface whose data holds the
/// link-layer address.
#[derive(Debug, Clone, Default)]
pub struct LinkLayerLookup {
    _private: (),
}

impl LinkLayerLookup {
    /// Creates a new link-layer lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl HardwareAddressLookup for LinkLayerLookup {
    fn lookup(&self, interface: &str) -> Result<MacAddress, LookupError> {
        let mut seen = false;

        for ifaddr in getifaddrs()?.filter(|ifaddr| ifaddr.interface_name == interface) {
            seen = true;
            let mac = ifaddr
                .address
                .as_ref()
                .and_then(SockaddrStorage::as_link_addr)
                .and_then(LinkAddr::addr);
            if let Some(octets) = mac {
                return Ok(MacAddress::new(octets));
            }
        }

        let name = interface.to_string();
        Err(if seen {
            LookupError::NoHardwareAddress { name }
        } else {
            LookupError::NotFound { name }
        })
    }
}
