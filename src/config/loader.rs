//! Load config from a JSON file and environment overrides.

use crate::config::{validate, AppConfig};
use crate::error::ConfigError;
use std::path::Path;

impl AppConfig {
    /// Defaults, then the JSON file at `CONFIG_PATH` if set, then `DATABASE_PATH` / `PORT` / `LISTEN_ADDR`.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::from_path(&path)?,
            Err(_) => AppConfig::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok());
        validate(&config)?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    /// `PORT` keeps the configured host; a full `LISTEN_ADDR` wins over it.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("DATABASE_PATH").filter(|v| !v.is_empty()) {
            self.database_path = path.into();
        }
        if let Some(port) = lookup("PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
            let host = match self.listen_addr.rsplit_once(':') {
                Some((host, _)) if !host.is_empty() => host.to_string(),
                _ => "0.0.0.0".to_string(),
            };
            self.listen_addr = format!("{host}:{port}");
        }
        if let Some(addr) = lookup("LISTEN_ADDR").filter(|v| !v.is_empty()) {
            self.listen_addr = addr;
        }
        self
    }
}
