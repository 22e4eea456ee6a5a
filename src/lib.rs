//! host-ident: local host network identity probe
//!
//! A library for discovering the machine's hostname, its primary
//! non-loopback IP address, and the MAC address of the interface that
//! carries it.

pub mod cli;
pub mod host;
pub mod network;
pub mod probe;
pub mod report;
