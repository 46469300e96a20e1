//! Error types for host calls and configuration.

use thiserror::Error;

/// Failure of a call into the embedding host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host binding exists but does not expose the named method.
    #[error("embedding host has no `{0}` method")]
    MissingMethod(&'static str),
    /// The host method was called and threw.
    #[error("embedding host rejected the call: {0}")]
    Rejected(String),
}

/// Invalid or unparseable shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Frame height must be a positive number of layout pixels.
    #[error("frame height must be positive, got {0}")]
    InvalidFrameHeight(u32),
    /// At least one toast must be visible.
    #[error("toast limit must be at least 1, got {0}")]
    InvalidToastLimit(usize),
    /// The host global name cannot be empty.
    #[error("embed.host_global must not be empty")]
    EmptyHostGlobal,
}
