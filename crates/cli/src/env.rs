// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use ob_core::{default_config_path, ConfigError, OscConfig};
use std::path::{Path, PathBuf};

/// Config file override
pub fn config_path() -> Option<PathBuf> {
    non_empty("OB_CONFIG").map(PathBuf::from)
}

/// Log filter: OB_LOG > RUST_LOG > "warn"
pub fn log_filter() -> String {
    non_empty("OB_LOG").or_else(|| non_empty("RUST_LOG")).unwrap_or_else(|| "warn".to_string())
}

/// When set, logs go to this file instead of stderr
pub fn log_file() -> Option<PathBuf> {
    non_empty("OB_LOG_FILE").map(PathBuf::from)
}

/// Resolve the effective config: file (explicit > OB_CONFIG > default path
/// if present) then environment overrides. CLI flags are applied by the caller.
pub fn resolve_config(explicit: Option<&Path>) -> Result<OscConfig, ConfigError> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(config_path)
        .or_else(|| default_config_path().filter(|p| p.exists()));
    let mut config = match path {
        Some(path) => OscConfig::load(&path)?,
        None => OscConfig::default(),
    };
    apply_overrides(&mut config);
    Ok(config)
}

/// Apply `OB_*` overrides. Unparseable values are ignored.
pub fn apply_overrides(config: &mut OscConfig) {
    if let Some(host) = non_empty("OB_OSC_HOST") {
        config.host = host;
    }
    if let Some(port) = parsed("OB_OSC_PORT") {
        config.port = port;
    }
    if let Some(port) = parsed("OB_REPLY_PORT") {
        config.reply_port = port;
    }
    if let Some(ms) = parsed("OB_PACING_MS") {
        config.pacing_ms = ms;
    }
    if let Some(ms) = parsed("OB_REPLY_TIMEOUT_MS") {
        config.reply_timeout_ms = ms;
    }
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    non_empty(key).and_then(|s| s.parse::<T>().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
