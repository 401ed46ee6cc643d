//! # park-storage
//!
//! Storage boundary for violation photos. The `PhotoStorage` trait hides
//! where bytes live; `LocalPhotoStorage` keeps them on the local
//! filesystem under a configured directory and addresses them by public
//! URL path.

mod error;
mod local;

pub use error::StorageError;
pub use local::LocalPhotoStorage;

use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Abstraction over the photo store
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Persist uploaded bytes, returning the public URL for the photo.
    ///
    /// The original filename is only consulted for its extension; the
    /// stored name is freshly generated.
    async fn store(&self, original_filename: &str, bytes: &[u8]) -> StorageResult<String>;

    /// Remove a previously stored photo by its public URL.
    ///
    /// Removing a URL whose file is already gone succeeds; a URL that
    /// does not point into this store is an error.
    async fn remove_by_url(&self, url: &str) -> StorageResult<()>;
}
