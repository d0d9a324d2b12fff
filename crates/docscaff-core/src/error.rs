//! Unified error handling for docscaff core.
//!
//! [`DocscaffError`] is what every public service returns. It wraps the
//! layer errors unchanged so callers can still match on the precise cause,
//! and exposes the two things a front-end needs: a [`ErrorCategory`] to pick
//! an exit code and a list of suggestions to print.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for docscaff core operations.
#[derive(Debug, Error, Clone)]
pub enum DocscaffError {
    /// Invalid key, options or meta tree shape.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Filesystem or meta source failure.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl DocscaffError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the run stopped partway through writing pages.
    ///
    /// Pages written before the failure stay on disk; rerunning after fixing
    /// the cause completes the tree without touching them.
    pub fn is_partial_write(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

pub type DocscaffResult<T> = Result<T, DocscaffError>;
