//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub coaching: CoachingConfig,
    pub output: OutputConfig,
}

/// Display policy for the coaching panel. Rubric weights are fixed and not
/// configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingConfig {
    pub max_items: usize,
    pub hide_threshold: u8,
    pub show_bullet_hints: bool,
    pub show_export_issues: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            max_items: 3,
            hide_threshold: 90,
            show_bullet_hints: true,
            show_export_issues: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coaching: CoachingConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.coaching.hide_threshold > 100 {
            return Err(ResumeScorerError::Configuration(format!(
                "coaching.hide_threshold must be within 0-100, got {}",
                self.coaching.hide_threshold
            )));
        }
        Ok(())
    }
}
