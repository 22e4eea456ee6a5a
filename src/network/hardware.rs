//! Hardware (MAC) address type and the lookup capability.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A 6-byte link-layer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates a MAC address from its raw bytes.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Builds a MAC address from the first 6 bytes of a longer buffer.
    ///
    /// Returns `None` if the buffer is too short.
    #[must_use]
    pub fn from_prefix(bytes: &[u8]) -> Option<Self> {
        bytes.get(..6)?.try_into().ok().map(Self)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

/// Lowercase, colon-separated: `00:1a:2b:3c:4d:5e`.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error type for hardware-address lookups.
///
/// None of these are fatal to the probe; they are reported as "unavailable".
#[derive(Debug, Error)]
pub enum LookupError {
    /// A Unix system call (socket, ioctl, `getifaddrs`) failed.
    #[cfg(unix)]
    #[error("System call failed: {0}")]
    Os(#[from] nix::errno::Errno),

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// The interface name cannot be passed to the OS.
    #[error("Invalid interface name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No interface with this name exists.
    #[error("Interface '{name}' not found")]
    NotFound {
        /// The requested name.
        name: String,
    },

    /// The interface exists but has no 6-byte link-layer address.
    #[error("Interface '{name}' has no hardware address")]
    NoHardwareAddress {
        /// The requested name.
        name: String,
    },
}

/// Capability: given an interface name, return its link-layer address.
///
/// Platform mechanisms differ (ioctl on Linux, `AF_LINK` entries on BSD,
/// adapter tables on Windows); see [`super::platform`].
pub trait HardwareAddressLookup {
    /// Looks up the MAC address of the named interface.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the OS query fails or the interface has no
    /// usable hardware address. Implementations must release any OS handle
    /// they opened before returning, on success and failure alike.
    fn lookup(&self, interface: &str) -> Result<MacAddress, LookupError>;
}
