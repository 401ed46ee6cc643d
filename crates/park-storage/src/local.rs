//! Local filesystem photo store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{PhotoStorage, StorageError, StorageResult};

/// Extensions accepted for violation photos
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Photo store backed by a local directory
///
/// Files are written under `root` with a freshly generated UUID name and
/// addressed as `{public_base}/{name}`. The server mounts `public_base`
/// as a static file route over `root`.
#[derive(Debug, Clone)]
pub struct LocalPhotoStorage {
    root: PathBuf,
    public_base: String,
    max_file_size: usize,
}

impl LocalPhotoStorage {
    /// Create a store rooted at `root`, served under `public_base`
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>, max_file_size: usize) -> Self {
        let public_base = public_base.into();
        Self {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
            max_file_size,
        }
    }

    /// The directory files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn extension_of(original_filename: &str) -> StorageResult<String> {
        let ext = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ext)
        } else {
            Err(StorageError::UnsupportedFileType(
                original_filename.to_string(),
            ))
        }
    }

    /// Map a public URL back to the stored filename, rejecting anything
    /// that escapes the store directory.
    fn filename_from_url(&self, url: &str) -> StorageResult<String> {
        let name = url
            .strip_prefix(&self.public_base)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| StorageError::ForeignUrl(url.to_string()))?;

        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(StorageError::ForeignUrl(url.to_string()));
        }

        Ok(name.to_string())
    }
}

#[async_trait]
impl PhotoStorage for LocalPhotoStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn store(&self, original_filename: &str, bytes: &[u8]) -> StorageResult<String> {
        if bytes.len() > self.max_file_size {
            return Err(StorageError::FileTooLarge {
                size: bytes.len(),
                limit: self.max_file_size,
            });
        }

        let ext = Self::extension_of(original_filename)?;
        let name = format!("{}.{ext}", Uuid::new_v4());

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&name), bytes).await?;

        debug!(name = %name, "stored photo");
        Ok(format!("{}/{name}", self.public_base))
    }

    #[instrument(skip(self))]
    async fn remove_by_url(&self, url: &str) -> StorageResult<()> {
        let name = self.filename_from_url(url)?;

        match tokio::fs::remove_file(self.root.join(&name)).await {
            Ok(()) => Ok(()),
            // Already gone counts as removed
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
