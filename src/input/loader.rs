//! Resume document loaders for the supported file formats

use crate::error::Result;
use crate::processing::document::ResumeDocument;
use std::path::Path;
use tokio::fs;

pub trait DocumentLoader {
    fn load(&self, path: &Path) -> impl std::future::Future<Output = Result<ResumeDocument>> + Send;
}

pub struct JsonLoader;

impl DocumentLoader for JsonLoader {
    async fn load(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await?;
        ResumeDocument::from_json(&content)
    }
}

pub struct TomlLoader;

impl DocumentLoader for TomlLoader {
    async fn load(&self, path: &Path) -> Result<ResumeDocument> {
        let content = fs::read_to_string(path).await?;
        ResumeDocument::from_toml(&content)
    }
}
