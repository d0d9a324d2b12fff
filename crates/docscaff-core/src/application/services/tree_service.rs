//! Tree Service - meta file loading and inspection.
//!
//! Separated from ScaffoldService for single responsibility: this service
//! never writes anything.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::MetaSource,
    domain::{DomainValidator as validator, MetaTree, TreeStats},
    error::DocscaffResult,
};

/// Statistics and problems for one meta file, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub path: PathBuf,
    pub stats: TreeStats,
    /// Keys that cannot become file names, with the reason.
    pub invalid_keys: Vec<String>,
}

/// Service for meta tree operations.
pub struct TreeService {
    source: Box<dyn MetaSource>,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(source: Box<dyn MetaSource>) -> Self {
        Self { source }
    }

    /// Load one meta tree.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> DocscaffResult<MetaTree> {
        self.source.load(path)
    }

    /// Every meta file beneath `root`.
    pub fn discover(&self, root: &Path) -> DocscaffResult<Vec<PathBuf>> {
        let found = self.source.discover(root)?;
        debug!(root = %root.display(), count = found.len(), "Discovered meta files");
        Ok(found)
    }

    /// Stats and invalid keys of an already loaded tree.
    pub fn summarize_tree(path: &Path, tree: &MetaTree) -> TreeSummary {
        TreeSummary {
            path: path.to_path_buf(),
            stats: tree.stats(),
            invalid_keys: validator::invalid_keys(tree)
                .into_iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}
