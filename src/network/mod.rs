//! Network layer: interface enumeration, address selection and
//! hardware-address lookup.
//!
//! This module provides types and traits for:
//! - Representing enumerated interface addresses ([`InterfaceEntry`], [`EntryAddress`])
//! - Loopback classification ([`is_loopback`])
//! - Enumerating interfaces ([`InterfaceFetcher`])
//! - Choosing the primary address ([`select_first`], [`Selection`])
//! - Looking up link-layer addresses ([`HardwareAddressLookup`], [`MacAddress`])
//! - Platform-specific implementations ([`platform`])

mod address;
mod fetcher;
mod hardware;
pub mod platform;
mod select;

#[cfg(test)]
mod select_tests;

pub use address::{EntryAddress, InterfaceEntry, IpFamily, is_loopback};
pub use fetcher::{FetchError, InterfaceFetcher};
pub use hardware::{HardwareAddressLookup, LookupError, MacAddress};
pub use select::{Selection, render_address, select_first};
