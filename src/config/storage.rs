//! Template and artifact storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::DEFAULT_MAX_ARTIFACT_BYTES;

/// Where the template is read from and where decrees are written
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Decree template file
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Directory receiving rendered decrees
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Base URL the output directory is served under
    pub public_base_url: Option<String>,

    /// Largest artifact accepted, in bytes
    #[serde(default = "default_max_artifact_bytes")]
    pub max_artifact_bytes: u64,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.template_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__TEMPLATE_PATH"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__OUTPUT_DIR"));
        }
        if self.max_artifact_bytes == 0 {
            return Err(ValidationError::InvalidMaxArtifactSize);
        }
        if let Some(url) = &self.public_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidPublicBaseUrl);
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            output_dir: default_output_dir(),
            public_base_url: None,
            max_artifact_bytes: default_max_artifact_bytes(),
        }
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from("templates/decree.txt")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("decrees")
}

fn default_max_artifact_bytes() -> u64 {
    DEFAULT_MAX_ARTIFACT_BYTES
}
