//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Mask the password while typing (default: true)
    pub mask_password: Option<bool>,
    /// Directory relative image paths are resolved against
    pub image_base_dir: Option<String>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SignupConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the user config dir
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save configuration to `path`, creating parent directories
    #[allow(dead_code)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }

    pub fn image_base_dir(&self) -> Option<PathBuf> {
        self.image_base_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.mask_password.is_none());
        assert!(config.image_base_dir.is_none());
        assert!(config.mask_password());
        assert!(config.image_base_dir().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            mask_password: Some(false),
            image_base_dir: Some("/home/me/Pictures".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.mask_password, Some(false));
        assert!(!parsed.mask_password());
        assert_eq!(
            parsed.image_base_dir(),
            Some(PathBuf::from("/home/me/Pictures"))
        );
    }

    #[test]
    fn test_empty_base_dir_is_ignored() {
        let config = SignupConfig {
            image_base_dir: Some(String::new()),
            ..Default::default()
        };
        assert!(config.image_base_dir().is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.mask_password.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mask_password": false, "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mask_password, Some(false));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = SignupConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.mask_password.is_none());
        assert!(config.image_base_dir.is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        let config = SignupConfig {
            mask_password: Some(false),
            image_base_dir: Some("/srv/avatars".to_string()),
        };

        config.save_to(&path).unwrap();
        let loaded = SignupConfig::load_from(&path).unwrap();

        assert_eq!(loaded.mask_password, Some(false));
        assert_eq!(loaded.image_base_dir(), Some(PathBuf::from("/srv/avatars")));
    }

    #[test]
    fn test_load_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(SignupConfig::load_from(&path).is_err());
    }
}
