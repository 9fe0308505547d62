use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::network::NetworkConfig;

pub mod dictionary;
pub mod history;
pub mod network;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub history: HistoryConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|name| env::var(name).ok());
        config
    }

    /// Load a JSON config file, falling back to defaults when it does not
    /// exist. Environment overrides win over the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&data).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;

        config.apply_env(|name| env::var(name).ok());
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("GLOSSA_BASE_URL") {
            self.dictionary.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(key) = lookup("GLOSSA_TRANSLATION_KEY") {
            match key.parse() {
                Ok(key) => self.dictionary.translation_key = key,
                Err(e) => tracing::warn!("Ignoring GLOSSA_TRANSLATION_KEY: {e}"),
            }
        }

        if let Some(timeout) = lookup("GLOSSA_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = timeout;
        }

        if let Some(max) = lookup("GLOSSA_HISTORY_MAX").and_then(|v| v.parse().ok()) {
            self.history.max_entries = max;
        }
    }
}

/// Directory holding `config.json` and the key-value store:
/// `GLOSSA_HOME`, else `$HOME/.config/glossa`, else `./.glossa`.
pub fn data_dir() -> PathBuf {
    if let Ok(home) = env::var("GLOSSA_HOME") {
        return PathBuf::from(home);
    }

    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("glossa"))
        .unwrap_or_else(|_| PathBuf::from(".glossa"))
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

pub fn store_path() -> PathBuf {
    data_dir().join("store.json")
}
