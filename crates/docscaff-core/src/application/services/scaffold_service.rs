//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Plan the meta tree (pure walk, see `domain::planner`)
//! 2. Materialise every planned directory and page that does not exist yet
//! 3. Report what was created, what already existed, and what was skipped
//!
//! Existing paths are never overwritten, so a run can be repeated any number
//! of times. Filesystem errors are not recovered: the first failure aborts
//! the run and is returned to the caller.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        Action, DocStructure, EntryKind, FsEntry, MetaTree,
        ScaffoldOptions, ScaffoldReport, planner,
    },
    error::{DocscaffError, DocscaffResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use docscaff_core::application::{ScaffoldService, ports::Filesystem};
    /// use docscaff_core::domain::ScaffoldOptions;
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(filesystem, ScaffoldOptions::default());
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, options: ScaffoldOptions) -> Self {
        Self {
            filesystem,
            options,
        }
    }

    pub fn options(&self) -> &ScaffoldOptions {
        &self.options
    }

    /// Plan `tree` under `base` without touching the filesystem.
    pub fn plan(&self, tree: &MetaTree, base: impl AsRef<Path>) -> DocscaffResult<DocStructure> {
        planner::plan(tree, &self.options, base.as_ref()).map_err(DocscaffError::Domain)
    }

    /// Scaffold `tree` into `base`.
    ///
    /// Creates `base` if missing, then every directory and page the plan
    /// names unless it already exists.
    #[instrument(skip_all, fields(base = %base.as_ref().display()))]
    pub fn scaffold(
        &self,
        tree: &MetaTree,
        base: impl AsRef<Path>,
    ) -> DocscaffResult<ScaffoldReport> {
        let base = base.as_ref();
        let structure = self.plan(tree, base)?;
        let mut report = ScaffoldReport::new(base, false);

        if !self.filesystem.exists(base) {
            self.filesystem.create_dir_all(base)?;
            info!(path = %base.display(), "Created folder");
            report.record(base, EntryKind::Directory, Action::Created);
        }

        for entry in structure.entries() {
            let path = base.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    if self.filesystem.exists(&path) {
                        info!(path = %path.display(), "Folder exists");
                        report.record(path, EntryKind::Directory, Action::Exists);
                    } else {
                        self.filesystem.create_dir_all(&path)?;
                        info!(path = %path.display(), "Created folder");
                        report.record(path, EntryKind::Directory, Action::Created);
                    }
                }
                FsEntry::File(file) => {
                    if self.filesystem.exists(&path) {
                        info!(path = %path.display(), "File exists");
                        report.record(path, EntryKind::File, Action::Exists);
                    } else {
                        self.filesystem.write_file(&path, &file.content)?;
                        info!(path = %path.display(), "Created file");
                        report.record(path, EntryKind::File, Action::Created);
                    }
                }
            }
        }

        info!(
            created = report.created(),
            existing = report.existing(),
            skipped = structure.skipped().len(),
            "Scaffold completed"
        );
        Ok(report.with_skipped(structure.skipped().iter().cloned()))
    }

    /// Dry run: report what [`scaffold`](Self::scaffold) would do.
    ///
    /// A path planned earlier in the same walk counts as existing, matching
    /// what a real run does when two entries land on the same path.
    #[instrument(skip_all, fields(base = %base.as_ref().display()))]
    pub fn preview(
        &self,
        tree: &MetaTree,
        base: impl AsRef<Path>,
    ) -> DocscaffResult<ScaffoldReport> {
        let base = base.as_ref();
        let structure = self.plan(tree, base)?;
        let mut report = ScaffoldReport::new(base, true);
        let mut planned: HashSet<PathBuf> = HashSet::new();

        if !self.filesystem.exists(base) {
            report.record(base, EntryKind::Directory, Action::WouldCreate);
        }

        for entry in structure.entries() {
            let path = base.join(entry.path());
            let kind = match entry {
                FsEntry::Directory(_) => EntryKind::Directory,
                FsEntry::File(_) => EntryKind::File,
            };
            let action = if planned.contains(&path) || self.filesystem.exists(&path) {
                Action::Exists
            } else {
                Action::WouldCreate
            };
            planned.insert(path.clone());
            report.record(path, kind, action);
        }

        Ok(report.with_skipped(structure.skipped().iter().cloned()))
    }
}
