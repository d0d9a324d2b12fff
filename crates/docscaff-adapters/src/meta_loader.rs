//! Filesystem-based meta tree loader.
//!
//! Parses `_meta.json` / `_meta.toml` files into domain [`MetaTree`]s and
//! discovers them beneath a pages directory, one file per subject area.
//!
//! # Directory layout expected
//!
//! ```text
//! pages/
//! ├── python/
//! │   └── _meta.json     ← one tree per track
//! ├── sql/
//! │   └── _meta.toml
//! └── algorithm/
//!     └── _meta.json
//! ```
//!
//! # Meta file format
//!
//! ```json
//! {
//!   "--getting-started": { "title": "Getting Started", "type": "separator" },
//!   "index": "Overview",
//!   "setup": {
//!     "title": "Environment Setup",
//!     "children": { "venv": "Virtual Environments" }
//!   }
//! }
//! ```
//!
//! | Value                                         | Entry          |
//! |-----------------------------------------------|----------------|
//! | string                                        | leaf           |
//! | `{ title, children: {..} }`                   | branch         |
//! | `{ title, type: "separator" }`                | separator      |
//! | anything else                                 | unrecognized   |
//!
//! TOML files use the same shapes (`[setup]` tables with a `[setup.children]`
//! sub-table).

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use docscaff_core::{
    application::{ApplicationError, ports::MetaSource},
    domain::{DomainError, MetaEntry, MetaTree},
    error::DocscaffResult,
};

/// File names recognised by [`FileMetaSource::discover`].
pub const META_FILE_NAMES: &[&str] = &["_meta.json", "_meta.toml"];

/// Meta file syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaFormat {
    Json,
    Toml,
}

impl MetaFormat {
    /// `.toml` → TOML, everything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse meta file text into a [`MetaTree`].
///
/// # Errors
///
/// Returns [`DomainError::InvalidMetaTree`] if the text is not valid
/// JSON / TOML, or if its top level is not a mapping. Malformed entries
/// inside a valid mapping are not errors; they become
/// [`MetaEntry::Unrecognized`].
pub fn parse_meta(text: &str, format: MetaFormat) -> Result<MetaTree, DomainError> {
    let value: Value = match format {
        MetaFormat::Json => serde_json::from_str(text)
            .map_err(|e| DomainError::InvalidMetaTree(format!("invalid JSON: {e}")))?,
        MetaFormat::Toml => toml::from_str(text)
            .map_err(|e| DomainError::InvalidMetaTree(format!("invalid TOML: {e}")))?,
    };
    tree_from_value(&value)
}

/// Convert an already-parsed value into a [`MetaTree`].
pub fn tree_from_value(value: &Value) -> Result<MetaTree, DomainError> {
    match value {
        Value::Object(map) => Ok(tree_from_map(map)),
        other => Err(DomainError::InvalidMetaTree(format!(
            "top level must be a mapping, found {}",
            shape_of(other)
        ))),
    }
}

fn tree_from_map(map: &Map<String, Value>) -> MetaTree {
    let mut tree = MetaTree::new();
    for (key, value) in map {
        tree.push(key.as_str(), classify(value));
    }
    tree
}

fn classify(value: &Value) -> MetaEntry {
    let map = match value {
        Value::String(title) => {
            return MetaEntry::Leaf {
                title: title.clone(),
            };
        }
        Value::Object(map) => map,
        other => {
            return MetaEntry::Unrecognized {
                shape: shape_of(other).into(),
            };
        }
    };

    let title = match map.get("title") {
        Some(Value::String(title)) if !title.is_empty() => title.clone(),
        _ => {
            return MetaEntry::Unrecognized {
                shape: "object without title".into(),
            };
        }
    };

    match map.get("children") {
        Some(Value::Object(children)) => MetaEntry::Branch {
            title,
            children: tree_from_map(children),
        },
        Some(_) => MetaEntry::Unrecognized {
            shape: "children is not an object".into(),
        },
        None if map.get("type").and_then(Value::as_str) == Some("separator") => {
            MetaEntry::Separator { title }
        }
        None => MetaEntry::Unrecognized {
            shape: "object without children".into(),
        },
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Source ────────────────────────────────────────────────────────────────────

/// Reads meta trees from JSON / TOML files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMetaSource;

impl FileMetaSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetaSource for FileMetaSource {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> DocscaffResult<MetaTree> {
        if !path.is_file() {
            return Err(ApplicationError::MetaNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::MetaSourceError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let tree = parse_meta(&raw, MetaFormat::from_path(path)).map_err(|e| {
            ApplicationError::MetaSourceError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        debug!(entries = tree.len(), "Loaded meta tree");
        Ok(tree)
    }

    /// Walk `root` for [`META_FILE_NAMES`]. Unreadable directory entries emit
    /// a `WARN` log and are skipped; they do not stop discovery.
    #[instrument(skip(self), fields(root = %root.display()))]
    fn discover(&self, root: &Path) -> DocscaffResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(ApplicationError::MetaNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let is_meta = entry
                .file_name()
                .to_str()
                .is_some_and(|name| META_FILE_NAMES.contains(&name));
            if is_meta {
                found.push(entry.into_path());
            }
        }

        found.sort();
        debug!(count = found.len(), "Finished discovery");
        Ok(found)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PYTHON_META: &str = r#"{
        "--getting-started": { "title": "Getting Started", "type": "separator" },
        "index": "Overview",
        "py_why_python": "Why Python?",
        "setup": {
            "title": "Environment Setup",
            "children": {
                "venv": "Setting Up Virtual Environment",
                "pip": "Using pip"
            }
        }
    }"#;

    fn entry<'a>(tree: &'a MetaTree, key: &str) -> Option<&'a MetaEntry> {
        tree.iter().find(|n| n.key == key).map(|n| &n.entry)
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn strings_are_leaves_and_objects_with_children_are_branches() {
        let tree = parse_meta(PYTHON_META, MetaFormat::Json).unwrap();

        assert_eq!(
            entry(&tree, "index"),
            Some(&MetaEntry::Leaf {
                title: "Overview".into()
            })
        );
        match entry(&tree, "setup") {
            Some(MetaEntry::Branch { title, children }) => {
                assert_eq!(title, "Environment Setup");
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected branch, got {other:?}"),
        }
    }

    #[test]
    fn separators_are_recognised() {
        let tree = parse_meta(PYTHON_META, MetaFormat::Json).unwrap();
        assert!(matches!(
            entry(&tree, "--getting-started"),
            Some(MetaEntry::Separator { title }) if title == "Getting Started"
        ));
    }

    #[test]
    fn file_order_is_preserved() {
        let tree = parse_meta(PYTHON_META, MetaFormat::Json).unwrap();
        let keys: Vec<_> = tree.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, ["--getting-started", "index", "py_why_python", "setup"]);
    }

    #[test]
    fn unknown_shapes_are_unrecognized() {
        let tree = parse_meta(
            r#"{
                "n": 3,
                "list": ["a"],
                "flag": true,
                "nothing": null,
                "untitled": { "children": {} },
                "empty_title": { "title": "", "children": {} },
                "bad_children": { "title": "X", "children": "nope" },
                "childless": { "title": "X" }
            }"#,
            MetaFormat::Json,
        )
        .unwrap();

        let shapes: Vec<_> = tree
            .iter()
            .map(|n| match &n.entry {
                MetaEntry::Unrecognized { shape } => shape.as_str(),
                other => panic!("{} should be unrecognized, got {other:?}", n.key),
            })
            .collect();

        assert_eq!(
            shapes,
            [
                "number",
                "array",
                "boolean",
                "null",
                "object without title",
                "object without title",
                "children is not an object",
                "object without children",
            ]
        );
    }

    #[test]
    fn top_level_must_be_a_mapping() {
        assert!(matches!(
            parse_meta("[1, 2]", MetaFormat::Json),
            Err(DomainError::InvalidMetaTree(msg)) if msg.contains("array")
        ));
        assert!(matches!(
            parse_meta("{ not json", MetaFormat::Json),
            Err(DomainError::InvalidMetaTree(_))
        ));
    }

    #[test]
    fn toml_uses_the_same_shapes() {
        let tree = parse_meta(
            r#"
index = "Overview"
count = 3

["--basics"]
title = "Basics"
type = "separator"

[setup]
title = "Setup"

[setup.children]
venv = "Virtualenv"
"#,
            MetaFormat::Toml,
        )
        .unwrap();

        let stats = tree.stats();
        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.branches, 1);
        assert_eq!(stats.separators, 1);
        assert_eq!(stats.unrecognized, 1);
        assert_eq!(tree.iter().next().map(|n| n.key.as_str()), Some("index"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(MetaFormat::from_path(Path::new("_meta.toml")), MetaFormat::Toml);
        assert_eq!(MetaFormat::from_path(Path::new("_meta.TOML")), MetaFormat::Toml);
        assert_eq!(MetaFormat::from_path(Path::new("_meta.json")), MetaFormat::Json);
        assert_eq!(MetaFormat::from_path(Path::new("meta")), MetaFormat::Json);
    }

    // ── FileMetaSource ────────────────────────────────────────────────────

    #[test]
    fn load_missing_file_is_not_found() {
        let err = FileMetaSource::new()
            .load(Path::new("/absolutely/does/not/exist/_meta.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            docscaff_core::error::DocscaffError::Application(ApplicationError::MetaNotFound { .. })
        ));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("_meta.json");
        fs::write(&path, "{ broken").unwrap();

        let err = FileMetaSource::new().load(&path).unwrap_err();
        assert!(err.to_string().contains("_meta.json"));
    }

    #[test]
    fn discover_finds_every_track_sorted() {
        let temp = TempDir::new().unwrap();
        for (dir, file) in [
            ("sql", "_meta.toml"),
            ("python", "_meta.json"),
            ("python/advanced", "_meta.json"),
            ("notes", "README.md"),
        ] {
            let d = temp.path().join(dir);
            fs::create_dir_all(&d).unwrap();
            fs::write(d.join(file), "{}").unwrap();
        }

        let found = FileMetaSource::new().discover(temp.path()).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            [
                PathBuf::from("python/_meta.json"),
                PathBuf::from("python/advanced/_meta.json"),
                PathBuf::from("sql/_meta.toml"),
            ]
        );
    }

    #[test]
    fn discover_on_missing_root_is_not_found() {
        assert!(
            FileMetaSource::new()
                .discover(Path::new("/absolutely/does/not/exist"))
                .is_err()
        );
    }
}
