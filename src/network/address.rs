//! Core network types for interface address representation.

use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

/// Address family of a selected IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpFamily {
    /// IPv4 (`AF_INET`).
    #[serde(rename = "IPv4")]
    V4,
    /// IPv6 (`AF_INET6`).
    #[serde(rename = "IPv6")]
    V6,
}

impl IpFamily {
    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// The address attached to one enumerated interface entry.
///
/// The operating system reports more than IP addresses per interface
/// (link-layer, packet sockets, ...). Those are kept as [`EntryAddress::Other`]
/// with their raw family code so callers can see what was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAddress {
    /// An IPv4 or IPv6 address.
    Ip(IpAddr),
    /// Any other address family, preserving the raw family code for debugging.
    Other(i32),
}

impl EntryAddress {
    /// Returns the IP family, or `None` for non-IP families.
    #[must_use]
    pub const fn family(&self) -> Option<IpFamily> {
        match self {
            Self::Ip(ip) => Some(IpFamily::of(ip)),
            Self::Other(_) => None,
        }
    }

    /// Returns true if this is a loopback address.
    ///
    /// See [`is_loopback`].
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        is_loopback(self)
    }
}

impl From<IpAddr> for EntryAddress {
    fn from(ip: IpAddr) -> Self {
        Self::Ip(ip)
    }
}

/// Classifies an interface address as loopback.
///
/// True for IPv4 `127.0.0.0/8` and for exactly IPv6 `::1`. Non-IP families
/// are never loopback.
#[must_use]
pub const fn is_loopback(address: &EntryAddress) -> bool {
    match address {
        EntryAddress::Ip(IpAddr::V4(v4)) => v4.is_loopback(),
        EntryAddress::Ip(IpAddr::V6(v6)) => v6.is_loopback(),
        EntryAddress::Other(_) => false,
    }
}

/// One interface/address pair, as reported by the operating system.
///
/// An interface carrying several addresses shows up as several entries
/// sharing the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// The interface name (e.g., "eth0", "en0", "Ethernet").
    pub name: String,
    /// The address of this entry, if the OS reported one.
    pub address: Option<EntryAddress>,
}

impl InterfaceEntry {
    /// Creates a new interface entry.
    #[must_use]
    pub fn new(name: impl Into<String>, address: Option<EntryAddress>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Creates an entry carrying an IP address.
    #[must_use]
    pub fn with_ip(name: impl Into<String>, ip: IpAddr) -> Self {
        Self::new(name, Some(EntryAddress::Ip(ip)))
    }

    /// Returns the IP address of this entry, if it has one.
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddr> {
        match self.address {
            Some(EntryAddress::Ip(ip)) => Some(ip),
            _ => None,
        }
    }
}
