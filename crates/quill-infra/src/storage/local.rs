//! Local-disk file store for uploaded images.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::ports::{FileStore, StorageError, StoredFile};

/// Stores uploads on the local filesystem and serves them from a public
/// base URL. Names are uuid-prefixed so colliding client filenames never
/// overwrite each other.
pub struct LocalFileStore {
    root: PathBuf,
    public_base: String,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }

    /// Keep only characters that are safe in a path segment and a URL.
    /// Leading dots go too, so the result can never be a dotfile or a
    /// parent-directory reference.
    fn sanitize_filename(filename: &str) -> String {
        let safe: String = filename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        let safe = safe.trim_start_matches(['.', '-']);

        if safe.is_empty() {
            "upload".to_string()
        } else {
            safe.to_string()
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<StoredFile, StorageError> {
        let name = format!("{}-{}", Uuid::new_v4(), Self::sanitize_filename(filename));

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let path = self.root.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let url = format!("{}/{}", self.public_base.trim_end_matches('/'), name);
        tracing::debug!(file = %name, "Stored upload");

        Ok(StoredFile { name, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> LocalFileStore {
        let dir = std::env::temp_dir().join(format!("quill-uploads-{}", Uuid::new_v4()));
        LocalFileStore::new(dir, "http://localhost:8080/uploads")
    }

    #[tokio::test]
    async fn stores_bytes_and_returns_public_url() {
        let store = temp_store();
        let stored = store.store("photo.png", vec![1, 2, 3]).await.unwrap();

        assert!(stored.name.ends_with("photo.png"));
        assert!(stored.url.starts_with("http://localhost:8080/uploads/"));

        let on_disk = tokio::fs::read(store.root.join(&stored.name)).await.unwrap();
        assert_eq!(on_disk, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn hostile_filenames_are_neutralized() {
        let store = temp_store();
        let stored = store.store("../../etc/passwd", vec![0]).await.unwrap();

        assert!(!stored.name.contains('/'));
        assert!(stored.name.ends_with("etc-passwd"));
    }

    #[test]
    fn empty_filename_gets_a_fallback() {
        assert_eq!(LocalFileStore::sanitize_filename("///"), "upload");
    }
}
