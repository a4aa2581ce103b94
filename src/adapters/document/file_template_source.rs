//! Filesystem implementation of the TemplateSource port.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::ports::{TemplateDocument, TemplateError, TemplateSource};

/// Reads the decree template from a file on every load.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn load(&self) -> Result<TemplateDocument, TemplateError> {
        let content = fs::read(&self.path).await.map_err(|e| {
            TemplateError::unavailable(self.path.display().to_string(), e.to_string())
        })?;

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        tracing::debug!(path = %self.path.display(), bytes = content.len(), "Loaded decree template");
        Ok(TemplateDocument::new(name, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_template_bytes_and_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("decree.txt");
        std::fs::write(&path, "Nomor: {{decree_number}}").unwrap();

        let doc = FileTemplateSource::new(&path).load().await.unwrap();

        assert_eq!(doc.name, "decree.txt");
        assert_eq!(doc.content, b"Nomor: {{decree_number}}");
        assert_eq!(doc.extension(), Some("txt"));
    }

    #[tokio::test]
    async fn missing_template_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = FileTemplateSource::new(dir.path().join("absent.txt"));

        let result = source.load().await;

        assert!(matches!(result, Err(TemplateError::Unavailable { .. })));
    }
}
