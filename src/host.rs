//! Hostname resolution.

use thiserror::Error;

/// The OS refused to report the hostname.
#[derive(Debug, Error)]
#[error("Failed to query hostname: {0}")]
pub struct HostnameError(#[from] pub std::io::Error);

/// Source of the machine's configured network hostname.
pub trait HostnameResolver {
    /// Returns the hostname.
    ///
    /// # Errors
    ///
    /// Returns [`HostnameError`] if the OS query fails.
    fn hostname(&self) -> Result<String, HostnameError>;
}

/// Reads the hostname from the operating system (`gethostname` on Unix,
/// `GetComputerNameExW` on Windows).
///
/// Non-UTF-8 bytes are replaced with U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameResolver for SystemHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        let name = hostname::get()?;
        Ok(name.to_string_lossy().into_owned())
    }
}
