//! Interface enumeration trait and error types.

use super::InterfaceEntry;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// The probe treats every variant as fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A Unix system call (`getifaddrs`) failed.
    #[cfg(unix)]
    #[error("System call failed: {0}")]
    Os(#[from] nix::errno::Errno),

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating interface/address pairs.
///
/// # Design
///
/// - Platform implementations live in [`super::platform`]
/// - Enables dependency injection for testing with mock implementations
///
/// # Example
///
/// ```
/// use host_ident::network::{FetchError, InterfaceEntry, InterfaceFetcher};
///
/// struct StaticFetcher(Vec<InterfaceEntry>);
///
/// impl InterfaceFetcher for StaticFetcher {
///     fn fetch(&self) -> Result<Vec<InterfaceEntry>, FetchError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let fetcher = StaticFetcher(vec![InterfaceEntry::with_ip("eth0", "10.0.0.5".parse().unwrap())]);
/// assert_eq!(fetcher.fetch().unwrap().len(), 1);
/// ```
pub trait InterfaceFetcher {
    /// Fetches every interface/address pair configured on the system.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the platform API call fails.
    ///
    /// # Implementation Notes
    ///
    /// - Implementations must return ALL entries, loopback included; selection
    ///   is done by the caller
    /// - Entries must keep the order in which the OS reported them
    fn fetch(&self) -> Result<Vec<InterfaceEntry>, FetchError>;
}
