//! Configuration management for recyclab
//!
//! Config stored at: ~/.config/recyclab/config.json

use recyclab_domain::model::settings::{
    BONE_DRY_REFERENCE_G, COARSE_REFERENCE_G, FINE_REFERENCE_G,
};
use recyclab_domain::model::{CalculationSettings, ScreenRejectSettings, TarePolicy};
use recyclab_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Reference mass for the bone-dry equivalent (g)
    #[serde(default = "default_bone_dry_reference")]
    pub bone_dry_reference_g: f64,

    /// Sample mass put over the coarse screen (g)
    #[serde(default = "default_coarse_reference")]
    pub coarse_reference_g: f64,

    /// Sample mass put over the fine screen (g)
    #[serde(default = "default_fine_reference")]
    pub fine_reference_g: f64,

    /// Treatment of a zero coarse tin mass
    #[serde(default = "default_coarse_policy")]
    pub coarse_tare_policy: TarePolicy,

    /// Treatment of a zero fine tin mass
    #[serde(default = "default_fine_policy")]
    pub fine_tare_policy: TarePolicy,

    /// Log level when neither --verbose nor RUST_LOG is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bone_dry_reference() -> f64 {
    BONE_DRY_REFERENCE_G
}

fn default_coarse_reference() -> f64 {
    COARSE_REFERENCE_G
}

fn default_fine_reference() -> f64 {
    FINE_REFERENCE_G
}

fn default_coarse_policy() -> TarePolicy {
    ScreenRejectSettings::default().coarse_tare_policy
}

fn default_fine_policy() -> TarePolicy {
    ScreenRejectSettings::default().fine_tare_policy
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            bone_dry_reference_g: default_bone_dry_reference(),
            coarse_reference_g: default_coarse_reference(),
            fine_reference_g: default_fine_reference(),
            coarse_tare_policy: default_coarse_policy(),
            fine_tare_policy: default_fine_policy(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("recyclab");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Reference masses and zero policies for the calculators
    pub fn calculation_settings(&self) -> CalculationSettings {
        CalculationSettings {
            bone_dry_reference_g: self.bone_dry_reference_g,
            screen: ScreenRejectSettings {
                coarse_reference_g: self.coarse_reference_g,
                fine_reference_g: self.fine_reference_g,
                coarse_tare_policy: self.coarse_tare_policy,
                fine_tare_policy: self.fine_tare_policy,
            },
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Recyclab Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:        {}", self.output_format)?;
        writeln!(f, "Bone dry reference:   {} g", self.bone_dry_reference_g)?;
        writeln!(f, "Coarse reference:     {} g", self.coarse_reference_g)?;
        writeln!(f, "Fine reference:       {} g", self.fine_reference_g)?;
        writeln!(f, "Coarse tare policy:   {}", self.coarse_tare_policy)?;
        writeln!(f, "Fine tare policy:     {}", self.fine_tare_policy)?;
        writeln!(f, "Log level:            {}", self.log_level)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_domain() {
        let settings = Config::default().calculation_settings();
        assert_eq!(settings, CalculationSettings::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            fine_reference_g: 25.0,
            fine_tare_policy: TarePolicy::ZeroMeansMissing,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"coarse_tare_policy": "always-subtract"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.coarse_tare_policy, TarePolicy::AlwaysSubtract);
        assert_eq!(config.fine_reference_g, 20.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
