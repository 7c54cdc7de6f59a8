//! Local filesystem adapter using tokio::fs.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use chainkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ChainkitError, ChainkitResult},
};
use tokio::fs;

/// Production filesystem implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, path: &Path) -> ChainkitResult<()> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    async fn write_file(&self, path: &Path, content: &str) -> ChainkitResult<()> {
        fs::write(path, content)
            .await
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    async fn read_to_string(&self, path: &Path) -> ChainkitResult<String> {
        fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error(path, e, "read file"))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn empty_dir(&self, path: &Path) -> ChainkitResult<()> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| map_io_error(path, e, "read directory"))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| map_io_error(path, e, "read directory"))?
        {
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| map_io_error(&entry_path, e, "get metadata"))?;

            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&entry_path).await
            } else {
                fs::remove_file(&entry_path).await
            };
            removed.map_err(|e| map_io_error(&entry_path, e, "remove"))?;
        }
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ChainkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
