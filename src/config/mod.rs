use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::Result;
use crate::utils::paths::{app_data_dir, config_file_in, ensure_dir};
use crate::utils::persistence::{read_json, write_json_atomic};

const DEFAULT_API_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            timeout_secs: Self::default_timeout_secs(),
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            theme: None,
        }
    }
}

impl Config {
    fn default_api_url() -> String {
        DEFAULT_API_URL.into()
    }

    fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            read_json(&self.path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        write_json_atomic(&self.path, config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        let config = manager.load().expect("load");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        let config = Config {
            api_url: "http://finance.local:4000".into(),
            theme: Some("dark".into()),
            ..Config::default()
        };
        manager.save(&config).expect("save");

        let loaded = manager.load().expect("load");
        assert_eq!(loaded.api_url, "http://finance.local:4000");
        assert_eq!(loaded.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn partial_file_backfills_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        std::fs::write(manager.path(), r#"{"api_url":"http://10.0.0.2:3001"}"#)
            .expect("write partial");
        let loaded = manager.load().expect("load");
        assert_eq!(loaded.api_url, "http://10.0.0.2:3001");
        assert_eq!(loaded.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
