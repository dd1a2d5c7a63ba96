use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::LumeraError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub metadata: MetadataConfig,
    pub playback: PlaybackConfig,
    pub update: UpdateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub language: String,
}

impl GeneralConfig {
    /// Whether the configured language is Italian — the one localized
    /// variant the resolver and the UI strings distinguish.
    pub fn is_italian(&self) -> bool {
        self.language.starts_with("it")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub resolver_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    pub check_on_startup: bool,
}

impl AppConfig {
    /// Load config: user file if present, built-in defaults otherwise.
    pub fn load() -> Result<Self, LumeraError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| LumeraError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| LumeraError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), LumeraError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LumeraError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the persisted favorites record.
    pub fn favorites_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("favorites.json"))
            .unwrap_or_else(|| PathBuf::from("favorites.json"))
    }

    /// Directory for cached poster images.
    pub fn posters_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("posters"))
            .unwrap_or_else(|| PathBuf::from("posters"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "lumera")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.general.language, "en-US");
        assert!(config.metadata.api_key.is_empty());
        assert_eq!(config.playback.resolver_base, "https://vixsrc.to");
        assert!(config.update.check_on_startup);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.general.language = "it-IT".into();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.general.language, "it-IT");
        assert!(deserialized.general.is_italian());
    }
}
