//! Shell configuration.
//!
//! The landing binary compiles `truthlens.toml` in with `include_str!`;
//! nothing is read from disk at run time.

use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_FRAME_HEIGHT;
use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Embedding host handshake
    pub embed: EmbedConfig,
    /// Toaster surface
    pub notifications: NotificationConfig,
    /// Tooltip provider
    pub tooltip: TooltipConfig,
    /// Browser console logging
    pub log: LogConfig,
}

/// Embedding host settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Name of the global the host installs on `window`.
    pub host_global: String,
    /// Height reported through `setFrameHeight`, in layout pixels.
    pub frame_height: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            host_global: "Streamlit".to_string(),
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

/// Toaster settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Maximum number of toasts on screen.
    pub toast_limit: usize,
    /// Auto-dismiss delay.
    pub dismiss_after_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_limit: 1,
            dismiss_after_ms: 5000,
        }
    }
}

/// Tooltip settings
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Hover delay before a tooltip opens.
    pub delay_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `truthlens_core=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.embed.frame_height == 0 {
            return Err(ConfigError::InvalidFrameHeight(self.embed.frame_height));
        }
        if self.embed.host_global.trim().is_empty() {
            return Err(ConfigError::EmptyHostGlobal);
        }
        if self.notifications.toast_limit == 0 {
            return Err(ConfigError::InvalidToastLimit(self.notifications.toast_limit));
        }
        Ok(())
    }
}
