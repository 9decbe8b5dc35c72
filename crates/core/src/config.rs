// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection and pacing settings for talking to AbletonOSC

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Port AbletonOSC listens on
pub const DEFAULT_PORT: u16 = 11000;
/// Port AbletonOSC sends replies to
pub const DEFAULT_REPLY_PORT: u16 = 11001;
pub const DEFAULT_PACING_MS: u64 = 100;
pub const DEFAULT_REPLY_TIMEOUT_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OscConfig {
    /// Host running Live
    pub host: String,
    /// Destination port for commands
    pub port: u16,
    /// Local port replies arrive on
    pub reply_port: u16,
    /// Delay after each command in a batch
    pub pacing_ms: u64,
    /// How long live queries wait for a reply
    pub reply_timeout_ms: u64,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            reply_port: DEFAULT_REPLY_PORT,
            pacing_ms: DEFAULT_PACING_MS,
            reply_timeout_ms: DEFAULT_REPLY_TIMEOUT_MS,
        }
    }
}

impl OscConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(path, &text)
    }

    /// `host:port` of the device
    pub fn destination(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn reply_timeout(&self) -> Duration {
        Duration::from_millis(self.reply_timeout_ms)
    }
}

/// `<config_dir>/ob/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ob").join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
