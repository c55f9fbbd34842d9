use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub kiosk: KioskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend root, e.g. `http://127.0.0.1:8000/api`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Assumed capacity until the backend reports its own.
    pub storage_total_mb: f64,
    /// Recording is refused below this much free space.
    pub min_free_mb: f64,
    /// The recording screen warns once below this much free space.
    pub low_storage_warning_mb: f64,
    /// Meeting list refresh while notes are still being generated.
    pub poll_interval_ms: u64,
    pub recording_tick_ms: u64,
    pub progress_tick_ms: u64,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            storage_total_mb: crate::model::DEFAULT_STORAGE_TOTAL_MB,
            min_free_mb: 100.0,
            low_storage_warning_mb: 500.0,
            poll_interval_ms: 3000,
            recording_tick_ms: 100,
            progress_tick_ms: 150,
        }
    }
}

impl KioskConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn recording_tick(&self) -> Duration {
        Duration::from_millis(self.recording_tick_ms)
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Apply a command-line override of the backend URL.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("safescribe").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("base_url = \"http://127.0.0.1:8000/api\""));
        assert!(written.contains("poll_interval_ms = 3000"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[kiosk]\npoll_interval_ms = 500\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.kiosk.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.kiosk.min_free_mb, 100.0);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[kiosk\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default().with_api_url(Some("http://kiosk:9000/api".to_string()));
        assert_eq!(config.api.base_url, "http://kiosk:9000/api");

        let config = Config::default().with_api_url(Some("  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }
}
