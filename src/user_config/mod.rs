//! User-level configuration loaded from `~/.items-daemon/config.toml`.
//!
//! The file is optional. Values given on the command line or through the
//! environment take precedence over anything set here.

mod loader;
mod settings;
pub use loader::{load_user_config, load_user_config_from};
pub use settings::{ServerSettings, DEFAULT_ADDR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Server-scoped settings (`[server]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `0.0.0.0:8000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    /// Allowed CORS origins; `"*"` allows any origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_origins: Option<Vec<String>>,
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".items-daemon").join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
