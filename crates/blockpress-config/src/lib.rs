use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.notion.com";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";
pub const DEFAULT_INTER_BATCH_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Missing required setting `{0}`")]
    MissingSetting(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreSettings,
    #[serde(default)]
    pub publish: PublishSettings,
}

/// Where and as whom documents are written.
///
/// `token` and `database_id` may reference environment variables
/// (`$NOTION_TOKEN`) or `~`; they are expanded when the file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub database_id: String,
}

impl StoreSettings {
    /// Checks that the settings needed to reach the store are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingSetting("store.token"));
        }
        if self.database_id.trim().is_empty() {
            return Err(ConfigError::MissingSetting("store.database_id"));
        }
        Ok(())
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_version: default_api_version(),
            token: String::new(),
            database_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSettings {
    #[serde(default = "default_inter_batch_delay_ms")]
    pub inter_batch_delay_ms: u64,
    /// Cut documents at the per-document block cap instead of paginating
    /// them in full.
    #[serde(default = "default_truncate_documents")]
    pub truncate_documents: bool,
}

impl PublishSettings {
    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            inter_batch_delay_ms: default_inter_batch_delay_ms(),
            truncate_documents: default_truncate_documents(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_inter_batch_delay_ms() -> u64 {
    DEFAULT_INTER_BATCH_DELAY_MS
}

fn default_truncate_documents() -> bool {
    true
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in secrets; an unset variable
        // leaves the setting empty so `validate` reports it
        config.store.token = Self::expand_value(&config.store.token).unwrap_or_default();
        config.store.database_id =
            Self::expand_value(&config.store.database_id).unwrap_or_default();

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockpress");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_value(value: &str) -> Option<String> {
        match shellexpand::full(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}
