//! One-shot host identity probe.
//!
//! Runs the three OS queries strictly in order:
//! 1. Hostname
//! 2. Interface enumeration and primary address selection
//! 3. Hardware-address lookup for the selected interface
//!
//! The first two are fatal on failure; the lookup degrades to "unavailable".

use thiserror::Error;

use crate::host::{HostnameError, HostnameResolver, SystemHostname};
use crate::network::platform::{PlatformFetcher, PlatformLookup};
use crate::network::{FetchError, HardwareAddressLookup, InterfaceFetcher, select_first};
use crate::report::HostIdentity;

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;

/// Error type for fatal probe failures.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The hostname could not be read.
    #[error(transparent)]
    Hostname(#[from] HostnameError),

    /// The interface list could not be retrieved.
    #[error("Failed to enumerate interface addresses: {0}")]
    InterfaceList(#[from] FetchError),

    /// Every enumerated entry was loopback, addressless or non-IP.
    #[error("No suitable non-loopback IP address found")]
    NoAddress,
}

/// Gathers a [`HostIdentity`] from three injected capabilities.
///
/// # Example
///
/// ```no_run
/// use host_ident::probe::Probe;
///
/// let identity = Probe::system().run().expect("probe failed");
/// println!("{identity}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Probe<H, F, L> {
    resolver: H,
    fetcher: F,
    lookup: L,
}

/// The probe wired to the current platform's implementations.
pub type SystemProbe = Probe<SystemHostname, PlatformFetcher, PlatformLookup>;

impl SystemProbe {
    /// Creates a probe backed by the operating system.
    #[must_use]
    pub fn system() -> Self {
        Self::default()
    }
}

impl<H, F, L> Probe<H, F, L>
where
    H: HostnameResolver,
    F: InterfaceFetcher,
    L: HardwareAddressLookup,
{
    /// Creates a probe from explicit capabilities.
    #[must_use]
    pub const fn new(resolver: H, fetcher: F, lookup: L) -> Self {
        Self {
            resolver,
            fetcher,
            lookup,
        }
    }

    /// Runs the probe once.
    ///
    /// Each OS query is attempted exactly once; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::Hostname`] if the hostname query fails
    /// - [`ProbeError::InterfaceList`] if interface enumeration fails
    /// - [`ProbeError::NoAddress`] if no non-loopback IP address exists
    ///
    /// A failed hardware-address lookup is not an error; the identity is
    /// returned with `mac: None`.
    pub fn run(&self) -> Result<HostIdentity, ProbeError> {
        let hostname = self.resolver.hostname()?;
        tracing::debug!(%hostname, "Resolved hostname");

        let entries = self.fetcher.fetch()?;
        let selection = select_first(entries).ok_or(ProbeError::NoAddress)?;

        let mac = match self.lookup.lookup(&selection.interface) {
            Ok(mac) => Some(mac),
            Err(e) => {
                tracing::debug!(
                    interface = %selection.interface,
                    "Hardware address unavailable: {e}"
                );
                None
            }
        };

        Ok(HostIdentity {
            hostname,
            selection,
            mac,
        })
    }
}
