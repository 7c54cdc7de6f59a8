//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be started.
    #[error("Failed to run '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    /// An external command exited unsuccessfully.
    #[error("'{command}' exited with {}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// `package.json` could not be read or updated.
    #[error("Invalid manifest at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// Shared generation state is unavailable (lock poisoned).
    #[error("Generation state lock poisoned")]
    StateLockError,
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command failed: {}", command),
                "Check the command output above for details".into(),
                "Re-run with --offline if the package registry is unreachable".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Check {}", path.display()),
                "The package manager init step may have failed".into(),
            ],
            Self::StateLockError => vec![
                "Internal state was poisoned by an earlier panic".into(),
                "Try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CommandSpawn { .. } => ErrorCategory::Configuration,
            Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::ManifestError { .. } => ErrorCategory::Validation,
            Self::StateLockError => ErrorCategory::Internal,
        }
    }
}
