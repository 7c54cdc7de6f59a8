//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `chainkit-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::ChainkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `chainkit_adapters::filesystem::LocalFilesystem` (production)
/// - `chainkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every method is a suspension point. `write_file` does not create parent
/// directories; callers create them first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    async fn create_dir_all(&self, path: &Path) -> ChainkitResult<()>;

    /// Write content to a file, replacing it if present.
    async fn write_file(&self, path: &Path, content: &str) -> ChainkitResult<()>;

    /// Read a whole file as UTF-8.
    async fn read_to_string(&self, path: &Path) -> ChainkitResult<String>;

    /// Check if path exists.
    async fn exists(&self, path: &Path) -> bool;

    /// Remove everything inside a directory, keeping the directory itself.
    async fn empty_dir(&self, path: &Path) -> ChainkitResult<()>;
}

/// An external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command. `code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Port for running external commands (package managers, git).
///
/// Implemented by:
/// - `chainkit_adapters::process::SystemProcessRunner` (production)
/// - `chainkit_adapters::process::RecordingProcessRunner` (testing)
///
/// A command that starts and exits non-zero is not an error at this level;
/// callers inspect the returned status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec) -> ChainkitResult<CommandStatus>;
}
