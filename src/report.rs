//! The host identity report.

use std::fmt;

use serde::Serialize;

use crate::network::{MacAddress, Selection};

/// Placeholder printed when the hardware address could not be read.
pub const UNAVAILABLE: &str = "unavailable";

/// Everything one probe run discovered.
///
/// `Display` renders the three-line text report (without a trailing newline);
/// [`HostIdentity::to_json`] renders the same data as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostIdentity {
    /// The machine's configured hostname.
    pub hostname: String,
    /// The primary non-loopback address and its interface.
    #[serde(flatten)]
    pub selection: Selection,
    /// Hardware address of the selected interface, if it could be read.
    pub mac: Option<MacAddress>,
}

impl HostIdentity {
    /// Serializes the identity as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which does not occur for well-formed values.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for HostIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network name: {}", self.hostname)?;
        writeln!(
            f,
            "IP address ({}): {}",
            self.selection.family, self.selection.address
        )?;
        match &self.mac {
            Some(mac) => write!(f, "MAC address: {mac}"),
            None => write!(f, "MAC address: {UNAVAILABLE}"),
        }
    }
}
