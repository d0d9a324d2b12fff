//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core service calls and render the
//! result. No planning or file-layout decisions live here.

use std::path::{Path, PathBuf};

use docscaff_adapters::FileMetaSource;
use docscaff_core::application::TreeService;

use crate::error::{CliError, CliResult};

pub mod check;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod tree;

pub(crate) fn tree_service() -> TreeService {
    TreeService::new(Box::new(FileMetaSource::new()))
}

/// `path` itself, or every meta file beneath it when it is a directory.
pub(crate) fn meta_files(trees: &TreeService, path: &Path) -> CliResult<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let found = trees.discover(path)?;
    if found.is_empty() {
        return Err(CliError::NoMetaFiles {
            path: path.to_path_buf(),
        });
    }
    Ok(found)
}

/// Directory holding `meta`, `.` for a bare file name.
pub(crate) fn meta_dir(meta: &Path) -> PathBuf {
    match meta.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
