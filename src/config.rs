use crate::scorer::DEFAULT_THRESHOLD;
use crate::utils::CostModel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "STRDIST_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Scoring
    pub default_threshold: u64,
    pub cost_model: CostModel,

    // Meta
    pub log_level: String,
    pub audit_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            cost_model: CostModel::Standard,
            log_level: "INFO".to_string(),
            audit_enabled: false,
        }
    }
}

impl Config {
    /// Load config from `path`, or defaults if the file does not exist
    ///
    /// A corrupt file is moved aside to `config.json.corrupt` and defaults
    /// are used; the parse error is returned so the caller can report it
    /// once logging is up.
    pub fn load_from(path: &Path) -> Result<(Self, Option<String>)> {
        if !path.exists() {
            return Ok((Self::default(), None));
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok((config, None)),
            Err(e) => {
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok((Self::default(), Some(e.to_string())))
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Config file location, honoring `STRDIST_CONFIG`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    config_dir().join("config.json")
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("strdist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_threshold, 3);
        assert_eq!(config.cost_model, CostModel::Standard);
        assert_eq!(config.log_level, "INFO");
        assert!(!config.audit_enabled);
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config = serde_json::from_str(r#"{"cost_model":"legacy"}"#).unwrap();
        assert_eq!(config.cost_model, CostModel::Legacy);
        assert_eq!(config.default_threshold, 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");
        let config = Config {
            default_threshold: 4,
            audit_enabled: true,
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");
        let (restored, problem) = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config, restored);
        assert!(problem.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let (config, problem) = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(problem.is_none());
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let (config, problem) = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(problem.is_some());
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }
}
