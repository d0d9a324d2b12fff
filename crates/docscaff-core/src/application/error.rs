//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! meta tree itself. Tree and option problems are `DomainError`s.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A meta file could not be read or parsed.
    #[error("Failed to load meta file {path}: {reason}")]
    MetaSourceError { path: PathBuf, reason: String },

    /// A meta file or pages directory does not exist.
    #[error("Meta file not found: {path}")]
    MetaNotFound { path: PathBuf },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MetaSourceError { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Meta files are JSON (.json) or TOML (.toml)".into(),
                "Try: docscaff check <FILE> to see what was understood".into(),
            ],
            Self::MetaNotFound { path } => vec![
                format!("Nothing found at {}", path.display()),
                "Pass a meta file (e.g. pages/python/_meta.json)".into(),
                "Or a directory containing _meta.json / _meta.toml files".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::MetaSourceError { .. } => ErrorCategory::Validation,
            Self::MetaNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
