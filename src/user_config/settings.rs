use super::ServerConfig;
use crate::cors::DEFAULT_CORS_ORIGINS;

/// Address the daemon binds to when nothing else is configured.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Effective server settings after merging CLI/env values over the user config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: String,
    pub cors_origins: Vec<String>,
}

impl ServerSettings {
    /// Merge in precedence order: CLI/env, then the config file, then built-in defaults.
    ///
    /// Origins are trimmed and blank entries dropped.
    #[must_use]
    pub fn resolve(
        cli_addr: Option<String>,
        cli_cors_origins: Option<Vec<String>>,
        file: &ServerConfig,
    ) -> Self {
        let addr = cli_addr
            .or_else(|| file.addr.clone())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let cors_origins = cli_cors_origins
            .or_else(|| file.cors_origins.clone())
            .unwrap_or_else(|| {
                DEFAULT_CORS_ORIGINS
                    .split(',')
                    .map(str::to_string)
                    .collect()
            })
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { addr, cors_origins }
    }

    /// Whether the `*` wildcard is among the allowed origins.
    #[must_use]
    pub fn allows_all_origins(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
