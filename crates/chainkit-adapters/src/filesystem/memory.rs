//! In-memory filesystem adapter for tests and dry runs.
//!
//! Every operation yields to the scheduler first, so concurrent callers on
//! one task interleave the way they would against a real disk. Per-path
//! counters let tests assert how often a file or directory was touched.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use chainkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ChainkitResult,
};

/// In-memory filesystem.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    writes: HashMap<PathBuf, usize>,
    dir_creates: HashMap<PathBuf, usize>,
    failing: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every write at or under `prefix` fail.
    pub fn fail_writes_under(&self, prefix: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.push(prefix.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// How many times `path` was written.
    pub fn write_count(&self, path: impl AsRef<Path>) -> usize {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.writes.get(path.as_ref()).copied())
            .unwrap_or(0)
    }

    /// How many times `create_dir_all` was called with exactly `path`.
    pub fn create_count(&self, path: impl AsRef<Path>) -> usize {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.dir_creates.get(path.as_ref()).copied())
            .unwrap_or(0)
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn create_dir_all(&self, path: &Path) -> ChainkitResult<()> {
        tokio::task::yield_now().await;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        *inner.dir_creates.entry(path.to_path_buf()).or_default() += 1;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> ChainkitResult<()> {
        tokio::task::yield_now().await;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        if inner.failing.iter().any(|prefix| path.starts_with(prefix)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Injected write failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        *inner.writes.entry(path.to_path_buf()).or_default() += 1;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn read_to_string(&self, path: &Path) -> ChainkitResult<String> {
        tokio::task::yield_now().await;
        self.read_file(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    async fn empty_dir(&self, path: &Path) -> ChainkitResult<()> {
        tokio::task::yield_now().await;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        inner.files.retain(|p, _| !p.starts_with(path));
        inner
            .directories
            .retain(|p| p == path || !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_without_parent_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a/b.sol"), "x").await.is_err());
    }

    #[tokio::test]
    async fn counts_writes_per_path() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).await.unwrap();
        fs.write_file(Path::new("/p/a"), "1").await.unwrap();
        fs.write_file(Path::new("/p/a"), "2").await.unwrap();

        assert_eq!(fs.write_count("/p/a"), 2);
        assert_eq!(fs.read_file("/p/a").as_deref(), Some("2"));
        assert_eq!(fs.create_count("/p"), 1);
    }

    #[tokio::test]
    async fn injected_failure_applies_to_prefix() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/lib")).await.unwrap();
        fs.fail_writes_under("/p/lib");

        assert!(fs.write_file(Path::new("/p/lib/x.ts"), "").await.is_err());
        assert!(fs.write_file(Path::new("/p/ok.ts"), "").await.is_ok());
    }

    #[tokio::test]
    async fn empty_dir_keeps_root() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/contracts")).await.unwrap();
        fs.write_file(Path::new("/p/contracts/A.sol"), "").await.unwrap();

        fs.empty_dir(Path::new("/p")).await.unwrap();

        assert!(fs.has_dir("/p"));
        assert!(!fs.has_dir("/p/contracts"));
        assert!(fs.list_files().is_empty());
    }
}
