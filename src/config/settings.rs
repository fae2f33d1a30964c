//! Configuration settings for the packet tool.

use serde::Deserialize;
use std::path::Path;

use crate::error::PacketError;
use crate::transport::Newline;

/// Main configuration structure.
///
/// Every section is optional; a missing file section falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub packet: PacketDefaults,
    pub serial: SerialConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied to packets when the command line leaves them out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacketDefaults {
    /// Sender identifier.
    pub id_src: i64,
    /// Destination identifier.
    pub id_des: i64,
    /// Shared secret appended to the auth input.
    pub key: String,
}

/// Serial transport configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Baud rate.
    pub baud: u32,
    /// Line terminator appended to each packet.
    pub newline: Newline,
    /// How long to collect a response after sending (0 = don't read).
    pub read_seconds: f64,
    /// Per-read timeout used while collecting.
    pub poll_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Log format ("pretty", "compact" or "json").
    pub format: String,
}

// Default value functions
fn default_id_src() -> i64 {
    1
}

fn default_id_des() -> i64 {
    2
}

fn default_key() -> String {
    "my_secret_key".to_string()
}

fn default_baud() -> u32 {
    115_200
}

fn default_poll_timeout_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PacketDefaults {
    fn default() -> Self {
        Self {
            id_src: default_id_src(),
            id_des: default_id_des(),
            key: default_key(),
        }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud: default_baud(),
            newline: Newline::default(),
            read_seconds: 0.0,
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PacketError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PacketError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| PacketError::Config {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<(), PacketError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(PacketError::Config {
                message: format!(
                    "Invalid log level '{}'. Valid levels: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["pretty", "compact", "json"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(PacketError::Config {
                message: format!(
                    "Invalid log format '{}'. Valid formats: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        if self.serial.baud == 0 {
            return Err(PacketError::Config {
                message: "Baud rate must be greater than zero".to_string(),
            });
        }

        if !self.serial.read_seconds.is_finite() || self.serial.read_seconds < 0.0 {
            return Err(PacketError::Config {
                message: format!(
                    "Invalid read_seconds {}. Must be a non-negative number",
                    self.serial.read_seconds
                ),
            });
        }

        if self.serial.poll_timeout_ms == 0 {
            return Err(PacketError::Config {
                message: "poll_timeout_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
