//! Local Filesystem Storage Adapter - Implementation of ArtifactStorage.
//!
//! Stores rendered decrees as files in a single output directory, named after
//! their decree number. Writes are atomic and write-once, with SHA-256
//! checksums.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::domain::decree::ArtifactRef;
use crate::ports::{ArtifactStorage, StorageError};

/// Default maximum artifact size (20 MB).
pub const DEFAULT_MAX_ARTIFACT_BYTES: u64 = 20 * 1024 * 1024;

/// Local filesystem storage for rendered decrees.
///
/// # Directory Structure
///
/// ```text
/// {base_path}/
/// ├── 001-PC-A.II-L-1-IX-I-25.txt
/// └── 002-PC-A.II-L-1-IX-II-25.txt
/// ```
///
/// # Write-once
///
/// 1. Write content to a uniquely named `{name}.{uuid}.tmp`
/// 2. Sync to disk
/// 3. Hard-link the temp file to `{name}`; the link fails if `{name}` exists
/// 4. Remove the temp file
///
/// A crash mid-write never leaves a file under the final name, and an
/// existing artifact is never replaced.
#[derive(Debug, Clone)]
pub struct LocalArtifactStorage {
    /// Directory all artifacts are written to.
    base_path: PathBuf,
    /// Base URL the directory is served under, without trailing slash.
    public_base_url: Option<String>,
    max_bytes: u64,
}

impl LocalArtifactStorage {
    /// Creates a new local artifact storage with the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: None,
            max_bytes: DEFAULT_MAX_ARTIFACT_BYTES,
        }
    }

    /// Publishes artifact links under this base URL.
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.public_base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Overrides the maximum artifact size.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Path an artifact of this name is stored at.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    fn validate_name(file_name: &str) -> Result<(), StorageError> {
        let invalid = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains('/')
            || file_name.contains('\\');
        if invalid {
            return Err(StorageError::invalid_name(file_name));
        }
        Ok(())
    }

    fn temp_path(&self, file_name: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.{}.tmp", file_name, Uuid::new_v4().simple()))
    }

    fn checksum(content: &[u8]) -> String {
        hex::encode(Sha256::digest(content))
    }

    fn public_url(&self, file_name: &str) -> Option<String> {
        self.public_base_url
            .as_ref()
            .map(|base| format!("{}/{}", base, file_name))
    }

    async fn write_temp(&self, temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let display = temp_path.display().to_string();
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| StorageError::io(&display, e))?;
        file.write_all(content)
            .await
            .map_err(|e| StorageError::io(&display, e))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::io(&display, e))
    }
}

#[async_trait]
impl ArtifactStorage for LocalArtifactStorage {
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<ArtifactRef, StorageError> {
        Self::validate_name(file_name)?;

        let size = content.len() as u64;
        if size > self.max_bytes {
            return Err(StorageError::file_too_large(size, self.max_bytes));
        }
        if self.exists(file_name).await? {
            return Err(StorageError::already_exists(file_name));
        }

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::io(self.base_path.display().to_string(), e))?;

        let temp_path = self.temp_path(file_name);
        let final_path = self.file_path(file_name);

        if let Err(e) = self.write_temp(&temp_path, content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        // Linking, unlike rename, refuses to replace an existing target.
        let linked = fs::hard_link(&temp_path, &final_path).await;
        let _ = fs::remove_file(&temp_path).await;
        match linked {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::already_exists(file_name));
            }
            Err(e) => return Err(StorageError::io(final_path.display().to_string(), e)),
        }

        tracing::debug!(path = %final_path.display(), size, "Stored decree artifact");

        Ok(ArtifactRef {
            url: self.public_url(file_name),
            path: final_path,
            checksum: Self::checksum(content),
            size_bytes: size,
        })
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        Self::validate_name(file_name)?;
        let path = self.file_path(file_name);
        fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::io(path.display().to_string(), e))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
