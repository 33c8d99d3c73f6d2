//! Input manager for loading resume documents from disk

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use crate::input::loader::{DocumentLoader, JsonLoader, TomlLoader};
use crate::processing::document::ResumeDocument;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, ResumeDocument>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_resume(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached resume for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let document = match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Loading JSON resume: {}", path.display());
                JsonLoader.load(path).await?
            }
            FileType::Toml => {
                info!("Loading TOML resume: {}", path.display());
                TomlLoader.load(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeScorerError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeScorerError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
