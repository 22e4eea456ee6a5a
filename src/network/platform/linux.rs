//! Linux hardware-address lookup using the `SIOCGIFHWADDR` ioctl.

use std::os::fd::AsRawFd;

use nix::errno::Errno;
use nix::sys::socket::{AddressFamily, SockFlag, SockType, socket};

use crate::network::{HardwareAddressLookup, LookupError, MacAddress};

nix::ioctl_read_bad!(
    /// Queries the hardware address of the interface named in the request.
    ///
    /// # Safety
    ///
    /// `fd` must be an open socket and `data` must point to a valid `ifreq`.
    siocgifhwaddr,
    libc::SIOCGIFHWADDR,
    libc::ifreq
);

/// Linux implementation of [`HardwareAddressLookup`].
///
/// Each lookup opens a throwaway `AF_INET` datagram socket as the control
/// channel. The socket is an owned descriptor, closed when the lookup
/// returns on any path.
#[derive(Debug, Clone, Default)]
pub struct IoctlLookup {
    _private: (),
}

impl IoctlLookup {
    /// Creates a new ioctl-based lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl HardwareAddressLookup for IoctlLookup {
    fn lookup(&self, interface: &str) -> Result<MacAddress, LookupError> {
        let mut request = interface_request(interface)?;

        let channel = socket(
            AddressFamily::Inet,
            SockType::Datagram,
            SockFlag::SOCK_CLOEXEC,
            None,
        )?;

        // SAFETY: `channel` stays open until the end of this function and
        // `request` is a fully initialized ifreq.
        unsafe { siocgifhwaddr(channel.as_raw_fd(), &raw mut request) }.map_err(|errno| {
            match errno {
                Errno::ENODEV => LookupError::NotFound {
                    name: interface.to_string(),
                },
                other => LookupError::Os(other),
            }
        })?;

        // SAFETY: a successful SIOCGIFHWADDR fills the `ifru_hwaddr` member.
        let hwaddr = unsafe { request.ifr_ifru.ifru_hwaddr };
        let bytes = hwaddr.sa_data.map(|byte| byte.to_ne_bytes()[0]);

        MacAddress::from_prefix(&bytes).ok_or_else(|| LookupError::NoHardwareAddress {
            name: interface.to_string(),
        })
    }
}

/// Builds an `ifreq` carrying the interface name.
///
/// Names that would not fit with their terminating NUL are rejected rather
/// than truncated, since a truncated name may address a different interface.
fn interface_request(name: &str) -> Result<libc::ifreq, LookupError> {
    let invalid = |reason| LookupError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return Err(invalid("empty name"));
    }
    if bytes.contains(&0) {
        return Err(invalid("contains a NUL byte"));
    }
    if bytes.len() >= libc::IFNAMSIZ {
        return Err(invalid("longer than IFNAMSIZ - 1 bytes"));
    }

    // SAFETY: ifreq is plain old data; all-zero is a valid value and leaves
    // the name NUL-terminated.
    let mut request: libc::ifreq = unsafe { std::mem::zeroed() };
    for (slot, &byte) in request.ifr_name.iter_mut().zip(bytes) {
        *slot = libc::c_char::from_ne_bytes([byte]);
    }
    Ok(request)
}
