//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};

/// Report this host's name, primary non-loopback IP address and the MAC
/// address of the interface carrying it.
#[derive(Debug, Parser)]
#[command(name = "host-ident")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (to stderr)
    #[arg(long, short)]
    pub verbose: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Three-line human-readable report
    #[default]
    #[value(name = "text")]
    Text,
    /// Single-line JSON object
    #[value(name = "json")]
    Json,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
