use std::path::{Path, PathBuf};

use serde::Serialize;

/// Final documentation structure ready for materialization.
///
/// This is the output of planning a meta tree. It contains no business
/// logic, only data. All paths are relative to `root`.
#[derive(Debug, Clone)]
pub struct DocStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
    pub(crate) skipped: Vec<SkippedEntry>,
}

impl DocStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn add_file(
        &mut self,
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        content: String,
        kind: PageKind,
    ) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            title: title.into(),
            content,
            kind,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn add_skipped(&mut self, parent: impl Into<PathBuf>, key: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedEntry {
            parent: parent.into(),
            key: key.into(),
            reason,
        });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Skipped entries that deserve a warning (separators excluded).
    pub fn warnings(&self) -> impl Iterator<Item = &SkippedEntry> {
        self.skipped.iter().filter(|s| s.reason.is_warning())
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// Which kind of page a file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Page for a leaf topic.
    Leaf,
    /// Index page inside a branch directory.
    Index,
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub title: String,
    pub content: String,
    pub kind: PageKind,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// A meta tree entry that produced no filesystem change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Directory holding the entry, relative to the root.
    pub parent: PathBuf,
    pub key: String,
    pub reason: SkipReason,
}

impl SkippedEntry {
    /// `parent/key` with `/` separators, e.g. `setup/broken`.
    pub fn location(&self) -> String {
        self.parent
            .join(&self.key)
            .display()
            .to_string()
            .replace('\\', "/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The value had a shape the scaffolder does not understand.
    Unrecognized(String),
    /// The key cannot be used as a path segment.
    InvalidKey(String),
    /// Navigation-only separator.
    Separator,
}

impl SkipReason {
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Separator)
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(shape) => write!(f, "unknown format ({shape})"),
            Self::InvalidKey(reason) => write!(f, "invalid key ({reason})"),
            Self::Separator => f.write_str("separator"),
        }
    }
}
