use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::DEFAULT_RECENT_LIMIT;

pub const ENV_HOST: &str = "BIENESTAR_HOST";
pub const ENV_PORT: &str = "BIENESTAR_PORT";

/// Server settings. Exercise data is embedded and never read from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then environment overrides.
    ///
    /// An explicit `config_path` must exist and parse. The implicit file under
    /// the user config directory is optional and skipped if it is broken.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::load_default_file(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bienestar").join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn load_default_file() -> Self {
        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!("ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("{ENV_PORT}={port:?} is not a valid port, keeping {}", self.port),
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
