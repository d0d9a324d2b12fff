//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `docscaff-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::MetaTree;
use crate::error::DocscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `docscaff_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations must never overwrite silently on their own behalf; the
/// service checks `exists` before every write.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DocscaffResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> DocscaffResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Port for reading meta trees.
///
/// Implemented by:
/// - `docscaff_adapters::meta_loader::FileMetaSource` (JSON / TOML files)
#[cfg_attr(test, mockall::automock)]
pub trait MetaSource: Send + Sync {
    /// Load one meta tree.
    fn load(&self, path: &Path) -> DocscaffResult<MetaTree>;

    /// Find every meta file beneath `root`, sorted.
    fn discover(&self, root: &Path) -> DocscaffResult<Vec<PathBuf>>;
}
