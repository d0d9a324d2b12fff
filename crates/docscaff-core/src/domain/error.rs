// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid topic key '{key}': {reason}")]
    InvalidTopicKey { key: String, reason: String },

    #[error("Invalid scaffold options: {0}")]
    InvalidOptions(String),

    // ========================================================================
    // Structural Errors
    // ========================================================================
    #[error("Invalid meta tree: {0}")]
    InvalidMetaTree(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTopicKey { key, reason } => vec![
                format!("Topic key '{}' cannot be used as a file name: {}", key, reason),
                "Keys must be a single path segment (no '/', '\\', '.' or '..')".into(),
            ],
            Self::InvalidOptions(msg) => vec![
                format!("Details: {}", msg),
                "Check the [scaffold] section of your configuration".into(),
                "Or pass --ext / --index explicitly".into(),
            ],
            Self::InvalidMetaTree(msg) => vec![
                format!("Details: {}", msg),
                "The top level of a meta file must be a mapping of topic keys".into(),
                "Example: { \"index\": \"Overview\" }".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTopicKey { .. } | Self::InvalidOptions(_) => ErrorCategory::Validation,
            Self::InvalidMetaTree(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
