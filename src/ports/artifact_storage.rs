//! Artifact Storage Port - Where rendered decrees end up.
//!
//! An issued decree number names exactly one artifact for its whole life, so
//! storage is write-once: a name that is already taken is an error, never an
//! overwrite.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::decree::ArtifactRef;

/// Port for write-once storage of rendered decrees.
///
/// # Contract
///
/// Implementations must:
/// - Never replace an artifact already stored under the same name
/// - Never expose a partially written artifact under its final name
/// - Report the SHA-256 of the stored bytes in the returned [`ArtifactRef`]
/// - Reject names that contain path separators
///
/// # Usage
///
/// ```rust,ignore
/// let name = format!("{}.txt", identifier.file_stem());
/// if storage.exists(&name).await? {
///     return Err(StorageError::already_exists(name));
/// }
/// let stored = storage.store(&name, &bytes).await?;
/// ```
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Stores a new artifact.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the name is taken, including by a concurrent writer
    /// - `InvalidName` if the name is empty or contains separators
    /// - `FileTooLarge` if the content exceeds the configured maximum
    /// - `Io` on any other filesystem failure
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<ArtifactRef, StorageError>;

    /// Whether an artifact is already stored under the name.
    async fn exists(&self, file_name: &str) -> Result<bool, StorageError>;
}

/// Errors from artifact storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// An artifact with this name was issued before.
    #[error("Artifact already exists: {name}")]
    AlreadyExists { name: String },

    /// Name is empty or would escape the output directory.
    #[error("Invalid artifact name: {name}")]
    InvalidName { name: String },

    #[error("Artifact too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("Storage failure at {path}: {message}")]
    Io { path: String, message: String },
}

impl StorageError {
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists { name: name.into() }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_names_the_artifact() {
        let err = StorageError::already_exists("001-PC-A.II-L-1-IX-I-25.txt");
        assert!(err.to_string().contains("001-PC-A.II-L-1-IX-I-25.txt"));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn io_error_carries_path_and_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = StorageError::io("/srv/decrees/x.txt", cause);
        assert_eq!(
            err,
            StorageError::Io {
                path: "/srv/decrees/x.txt".to_string(),
                message: "disk full".to_string(),
            }
        );
    }

    #[test]
    fn file_too_large_displays_sizes() {
        let err = StorageError::file_too_large(10_000_000, 5_000_000);
        assert!(err.to_string().contains("10000000"));
        assert!(err.to_string().contains("5000000"));
    }

    #[test]
    fn artifact_storage_is_object_safe() {
        fn check<T: ArtifactStorage + ?Sized>() {}
        check::<dyn ArtifactStorage>();
    }
}
