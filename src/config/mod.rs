//! Configuration management for flashdeck

pub mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::session::ReinsertionPolicy;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected built-in theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Deck file loaded at startup
    pub deck_path: PathBuf,

    /// Fixed session sizes offered on the home screen
    pub size_presets: Vec<usize>,

    /// Preset selected when the home screen opens
    pub default_size: usize,

    /// Reinsertion offsets for Unlimited sessions
    pub reinsertion: ReinsertionPolicy,

    /// Seed for shuffles and offsets (random when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            deck_path: PathBuf::from("deck.json"),
            size_presets: vec![10, 15, 25, 50],
            default_size: 15,
            reinsertion: ReinsertionPolicy::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")?
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Reject settings the session logic cannot run with
    pub fn validate(&self) -> Result<()> {
        self.reinsertion.validate().context("Invalid reinsertion settings")?;

        if self.custom_theme.is_none() && Theme::by_name(&self.theme).is_none() {
            let names: Vec<_> = Theme::builtin().into_iter().map(|t| t.name).collect();
            bail!("Unknown theme {:?}, available: {}", self.theme, names.join(", "));
        }

        if self.size_presets.is_empty() {
            bail!("size_presets must list at least one session size");
        }
        if self.size_presets.contains(&0) {
            bail!("size_presets must not contain 0");
        }
        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "flashdeck")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "flashdeck").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme
            .clone()
            .or_else(|| Theme::by_name(&self.theme))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::OffsetRange;
    use ratatui::style::Color;
    use tempfile::TempDir;

    #[test]
    fn default_config_offers_fifteen_card_sessions() {
        let config = Config::default();
        assert_eq!(config.default_size, 15);
        assert!(config.size_presets.contains(&15));
        assert_eq!(config.reinsertion, ReinsertionPolicy::default());
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Tokyo Night"));
        assert!(!json.contains("seed"));
    }

    #[test]
    fn config_deserializes_partial_json() {
        let json = r#"{"deck_path":"cards/spanish.json","seed":9}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.deck_path, PathBuf::from("cards/spanish.json"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.size_presets, vec![10, 15, 25, 50]);
    }

    #[test]
    fn load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_reads_saved_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let config = Config { size_presets: vec![5, 20], default_size: 5, ..Default::default() };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_rejects_invalid_offsets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.reinsertion.medium = OffsetRange::new(30, 25);
        config.save_to(&path).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn active_theme_follows_theme_name() {
        let config: Config = serde_json::from_str(r#"{"theme":"tokyo night"}"#).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.active_theme(), Theme::tokyo_night());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme":"Nonexistent"}"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Unknown theme \"Nonexistent\""), "{}", err);
    }

    #[test]
    fn custom_theme_overrides_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let custom = Theme { name: "Mine".into(), error: Color::Red, ..Theme::tokyo_night() };
        let config = Config {
            theme: "Mine".into(),
            custom_theme: Some(custom.clone()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.active_theme(), custom);
        assert_eq!(loaded.active_theme().error, Color::Red);
    }

    #[test]
    fn validate_rejects_zero_preset() {
        let config = Config { size_presets: vec![0, 10], ..Default::default() };
        assert!(config.validate().is_err());

        let config = Config { size_presets: vec![], ..Default::default() };
        assert!(config.validate().is_err());
    }
}
