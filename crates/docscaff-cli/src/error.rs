//! Error handling for the docscaff CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use docscaff_core::error::DocscaffError;

pub use docscaff_core::error::ErrorCategory as CoreCategory;

use crate::config::KNOWN_KEYS;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `-o` was given together with a directory of meta files.
    #[error("--output cannot be used when {path} is a directory")]
    OutputWithDirectory { path: PathBuf },

    /// A directory was searched and held no meta files.
    #[error("No _meta.json or _meta.toml found under {path}")]
    NoMetaFiles { path: PathBuf },

    /// `check --strict` found entries that would be skipped.
    #[error("{warnings} warning(s) found in strict mode")]
    StrictCheckFailed { warnings: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown config key: '{key}'")]
    UnknownConfigKey { key: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `docscaff-core` or an adapter.
    #[error("{0}")]
    Core(#[from] DocscaffError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::OutputWithDirectory { path } => vec![
                "Each discovered meta file is scaffolded into its own directory".into(),
                format!(
                    "Drop --output, or point at a single file: docscaff generate {}",
                    path.join("_meta.json").display()
                ),
            ],

            Self::NoMetaFiles { path } => vec![
                format!("Create {}", path.join("_meta.json").display()),
                "Meta files must be named exactly _meta.json or _meta.toml".into(),
            ],

            Self::StrictCheckFailed { .. } => vec![
                "Fix or remove the entries listed above".into(),
                "Run without --strict to treat them as warnings".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active file with 'docscaff config path'".into(),
                "Use 'docscaff init --force' to recreate a default config".into(),
            ],

            Self::UnknownConfigKey { .. } => {
                let mut suggestions = vec!["Known keys:".to_string()];
                for key in KNOWN_KEYS {
                    suggestions.push(format!("  • {key}"));
                }
                suggestions
            }

            Self::Core(core_err) => {
                let mut suggestions = core_err.suggestions();
                if core_err.is_partial_write() {
                    suggestions.push(
                        "Pages written before the failure were kept; rerun to finish the rest"
                            .into(),
                    );
                }
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutputWithDirectory { .. } => ErrorCategory::UserError,
            Self::NoMetaFiles { .. } => ErrorCategory::NotFound,
            Self::StrictCheckFailed { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Convert foreign error types into [`CliError`] at call-sites with a
/// context message.
///
/// Concrete impls only: a blanket impl would overlap with both.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::de::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {}", f().into(), e.message()),
            source: Some(Box::new(e)),
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docscaff_core::application::ApplicationError;
    use docscaff_core::domain::DomainError;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unknown_key_lists_known_keys() {
        let err = CliError::UnknownConfigKey {
            key: "defaults.lang".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("scaffold.extension")));
        assert!(suggestions.iter().any(|s| s.contains("output.no_color")));
    }

    #[test]
    fn output_with_directory_points_at_a_meta_file() {
        let err = CliError::OutputWithDirectory {
            path: PathBuf::from("pages"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("_meta.json")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let core: DocscaffError = DomainError::InvalidOptions("extension is empty".into()).into();
        let err = CliError::from(core.clone());
        assert_eq!(err.suggestions(), core.suggestions());
    }

    #[test]
    fn write_failure_suggests_rerun() {
        let core: DocscaffError = ApplicationError::FilesystemError {
            path: "docs/a.mdx".into(),
            reason: "Failed to write file: denied".into(),
        }
        .into();
        let suggestions = CliError::from(core).suggestions();
        assert!(suggestions.iter().any(|s| s.contains("rerun")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::OutputWithDirectory {
                path: "pages".into()
            }
            .exit_code(),
            2
        );
        assert_eq!(CliError::StrictCheckFailed { warnings: 1 }.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let missing: DocscaffError = ApplicationError::MetaNotFound {
            path: "_meta.json".into(),
        }
        .into();
        assert_eq!(CliError::Core(missing).exit_code(), 3);
        assert_eq!(
            CliError::NoMetaFiles {
                path: "pages".into()
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        let io_failure: DocscaffError = ApplicationError::FilesystemError {
            path: "docs/a.mdx".into(),
            reason: "Failed to write file: denied".into(),
        }
        .into();
        assert_eq!(CliError::Core(io_failure).exit_code(), 1);
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn malformed_meta_file_is_a_user_error() {
        let bad: DocscaffError = ApplicationError::MetaSourceError {
            path: "_meta.json".into(),
            reason: "invalid JSON".into(),
        }
        .into();
        assert_eq!(CliError::Core(bad).exit_code(), 2);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::NoMetaFiles {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_toml_error() {
        let result: Result<toml::Table, toml::de::Error> = toml::from_str("[broken");
        let cli = result.with_cli_context(|| "parsing .docscaff.toml");
        assert!(matches!(cli, Err(CliError::ConfigError { .. })));
    }
}
