use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::post::PostDocument;

/// Trait for whole-document post persistence.
///
/// Abstracted as a trait so tests can use an in-memory fake without touching
/// the file system.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read and parse the live store document.
    async fn read_store(&self) -> Result<PostDocument, AppError>;

    /// Read and parse the read-only template document.
    async fn read_template(&self) -> Result<PostDocument, AppError>;

    /// Overwrite the live store document.
    ///
    /// Always targets the live path, even when the preceding read was served
    /// by the template: the first write promotes the template contents into
    /// the live store.
    async fn write_store(&self, doc: &PostDocument) -> Result<(), AppError>;
}

/// File-backed implementation of PostStore.
///
/// Resolves the two fixed paths and reads/writes whole documents as 2-space
/// indented JSON. No locking and no atomic rename: each write fully
/// overwrites the live file, and concurrent read-modify-write cycles can
/// lose updates.
pub struct FilePostStore {
    store_path: PathBuf,
    template_path: PathBuf,
}

impl FilePostStore {
    pub fn new(store_path: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            template_path: template_path.into(),
        }
    }

    async fn read_document(path: &Path) -> Result<PostDocument, AppError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| AppError::Store(e.to_string()))
    }
}

#[async_trait]
impl PostStore for FilePostStore {
    async fn read_store(&self) -> Result<PostDocument, AppError> {
        Self::read_document(&self.store_path).await
    }

    async fn read_template(&self) -> Result<PostDocument, AppError> {
        Self::read_document(&self.template_path).await
    }

    async fn write_store(&self, doc: &PostDocument) -> Result<(), AppError> {
        let raw =
            serde_json::to_string_pretty(doc).map_err(|e| AppError::Store(e.to_string()))?;
        tokio::fs::write(&self.store_path, raw)
            .await
            .map_err(|e| AppError::Store(e.to_string()))
    }
}
