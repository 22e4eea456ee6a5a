//! Platform-specific interface enumeration and hardware-address lookup.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of [`InterfaceFetcher`](super::InterfaceFetcher) and
//! [`HardwareAddressLookup`](super::HardwareAddressLookup).
//!
//! # Platform Support
//!
//! - **Unix**: Enumerates addresses with `getifaddrs`.
//! - **Linux**: Reads the MAC address with the `SIOCGIFHWADDR` ioctl.
//! - **macOS / BSD**: Reads the MAC address from `AF_LINK` entries of `getifaddrs`.
//! - **Windows**: Uses the `GetAdaptersAddresses` API via the `windows` crate.

#[cfg(unix)]
mod unix;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(all(unix, not(target_os = "linux")))]
mod bsd;

#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixFetcher;

#[cfg(target_os = "linux")]
pub use linux::IoctlLookup;

#[cfg(all(unix, not(target_os = "linux")))]
pub use bsd::LinkLayerLookup;

#[cfg(windows)]
pub use windows::{WindowsFetcher, WindowsLookup};

// Re-export platform-specific implementations under stable names for convenience
#[cfg(unix)]
pub use unix::UnixFetcher as PlatformFetcher;

#[cfg(target_os = "linux")]
pub use linux::IoctlLookup as PlatformLookup;

#[cfg(all(unix, not(target_os = "linux")))]
pub use bsd::LinkLayerLookup as PlatformLookup;

#[cfg(windows)]
pub use windows::{WindowsFetcher as PlatformFetcher, WindowsLookup as PlatformLookup};
