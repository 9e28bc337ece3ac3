//! File storage port - abstraction over where uploaded images land.

use async_trait::async_trait;

/// A stored file: the name it was persisted under and its public URL.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub name: String,
    pub url: String,
}

/// File store trait. Uploads are independent of any post save that follows;
/// a failed post save does not roll the upload back.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `bytes` under a name derived from `filename` and return the
    /// public reference.
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<StoredFile, StorageError>;
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}
