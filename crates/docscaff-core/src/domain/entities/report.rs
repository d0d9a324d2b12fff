use std::path::{Path, PathBuf};

use serde::Serialize;

use super::doc_structure::SkippedEntry;

/// What a scaffold run did (or would do) to each planned path.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    root: PathBuf,
    dry_run: bool,
    outcomes: Vec<Outcome>,
    skipped: Vec<SkippedEntry>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            outcomes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn record(&mut self, path: impl Into<PathBuf>, kind: EntryKind, action: Action) {
        self.outcomes.push(Outcome {
            path: path.into(),
            kind,
            action,
        });
    }

    pub fn with_skipped(mut self, skipped: impl IntoIterator<Item = SkippedEntry>) -> Self {
        self.skipped.extend(skipped);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn created(&self) -> usize {
        self.count(Action::Created)
    }

    pub fn existing(&self) -> usize {
        self.count(Action::Exists)
    }

    pub fn planned(&self) -> usize {
        self.count(Action::WouldCreate)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SkippedEntry> {
        self.skipped.iter().filter(|s| s.reason.is_warning())
    }

    /// `true` when no entry was skipped with a warning.
    pub fn is_clean(&self) -> bool {
        self.warnings().next().is_none()
    }

    fn count(&self, action: Action) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Full path (root joined).
    pub path: PathBuf,
    pub kind: EntryKind,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    /// Already present; left untouched.
    Exists,
    /// Dry-run only.
    WouldCreate,
}
