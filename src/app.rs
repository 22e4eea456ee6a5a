//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and report output
//! that support the main entry point.

use host_ident::cli::OutputFormat;
use host_ident::report::HostIdentity;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - report printed, MAC address possibly unavailable.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Failure (exit code 1) - hostname, interface list, or no usable address.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only the report.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the identity in the requested format.
///
/// # Errors
///
/// Returns the JSON serializer error for [`OutputFormat::Json`].
pub fn render(identity: &HostIdentity, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(identity.to_string()),
        OutputFormat::Json => identity.to_json(),
    }
}
