//! End-to-end scaffolding through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use docscaff_adapters::{FileMetaSource, LocalFilesystem, MemoryFilesystem};
use docscaff_core::prelude::*;
use tempfile::TempDir;

const PYTHON_META: &str = r#"{
  "--getting-started": { "title": "Getting Started", "type": "separator" },
  "index": "Overview",
  "py_why_python": "Why Python?",
  "setup": {
    "title": "Environment Setup",
    "children": {
      "venv": "Setting Up Virtual Environment",
      "ide": {
        "title": "Choosing an IDE",
        "children": { "vscode": "VS Code" }
      }
    }
  },
  "broken": 42
}"#;

fn load(dir: &Path) -> MetaTree {
    let path = dir.join("_meta.json");
    fs::write(&path, PYTHON_META).unwrap();
    TreeService::new(Box::new(FileMetaSource::new()))
        .load(&path)
        .unwrap()
}

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()), ScaffoldOptions::default())
}

fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    let mut out: Vec<_> = walk(root)
        .into_iter()
        .map(|p| {
            let content = if p.is_file() {
                fs::read_to_string(&p).unwrap()
            } else {
                String::new()
            };
            (p.strip_prefix(root).unwrap().to_path_buf(), content)
        })
        .collect();
    out.sort();
    out
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            found.extend(walk(&path));
        }
        found.push(path);
    }
    found
}

#[test]
fn loaded_meta_file_produces_expected_layout() {
    let temp = TempDir::new().unwrap();
    let tree = load(temp.path());

    let report = local_service().scaffold(&tree, temp.path()).unwrap();

    let root = temp.path();
    assert!(root.join("index.mdx").is_file());
    assert!(root.join("py_why_python.mdx").is_file());
    assert!(root.join("setup").is_dir());
    assert!(root.join("setup/index.mdx").is_file());
    assert!(root.join("setup/venv.mdx").is_file());
    assert!(root.join("setup/ide/index.mdx").is_file());
    assert!(root.join("setup/ide/vscode.mdx").is_file());

    // separator and unknown shape leave nothing behind
    assert!(!root.join("--getting-started.mdx").exists());
    assert!(!root.join("broken.mdx").exists());
    assert!(!root.join("broken").exists());

    assert_eq!(report.created(), 8);
    assert_eq!(report.warnings().count(), 1);
    assert_eq!(report.skipped().len(), 2);
}

#[test]
fn page_contents_follow_default_templates() {
    let temp = TempDir::new().unwrap();
    let tree = load(temp.path());
    local_service().scaffold(&tree, temp.path()).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("py_why_python.mdx")).unwrap(),
        "---\ntitle: Why Python?\n---\n\n## Why Python?\n\nContent coming soon...\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("setup/index.mdx")).unwrap(),
        "---\ntitle: Environment Setup\n---\n\n## Environment Setup\n\nOverview coming soon...\n"
    );
}

#[test]
fn second_run_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let tree = load(temp.path());
    let service = local_service();

    service.scaffold(&tree, temp.path()).unwrap();
    let before = snapshot(temp.path());

    let again = service.scaffold(&tree, temp.path()).unwrap();
    assert_eq!(again.created(), 0);
    assert_eq!(again.existing(), 8);
    assert_eq!(snapshot(temp.path()), before);
}

#[test]
fn hand_edited_pages_are_preserved() {
    let temp = TempDir::new().unwrap();
    let tree = load(temp.path());
    fs::create_dir_all(temp.path().join("setup")).unwrap();
    fs::write(temp.path().join("setup/venv.mdx"), "my notes").unwrap();

    let report = local_service().scaffold(&tree, temp.path()).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("setup/venv.mdx")).unwrap(),
        "my notes"
    );
    assert!(
        report
            .outcomes()
            .iter()
            .any(|o| o.path.ends_with("setup/venv.mdx") && o.action == Action::Exists)
    );
}

#[test]
fn missing_output_directory_is_created() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("pages/python");
    let tree = MetaTree::new().with_leaf("index", "Overview");

    let report = local_service().scaffold(&tree, &out).unwrap();

    assert!(out.join("index.mdx").is_file());
    assert_eq!(report.created(), 2);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let tree = load(temp.path());

    let report = local_service().preview(&tree, temp.path()).unwrap();

    assert!(report.is_dry_run());
    assert_eq!(report.planned(), 8);
    assert_eq!(report.created(), 0);
    assert!(!temp.path().join("index.mdx").exists());
    assert!(!temp.path().join("setup").exists());
}

#[test]
fn tree_with_only_unknown_shapes_touches_nothing() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("docs")).unwrap();
    let tree = MetaTree::new()
        .with_unrecognized("a", "number")
        .with_unrecognized("b", "array");

    let service = ScaffoldService::new(Box::new(fs.clone()), ScaffoldOptions::default());
    let report = service.scaffold(&tree, "docs").unwrap();

    assert!(fs.list_files().is_empty());
    assert_eq!(fs.list_dirs(), [PathBuf::from("docs")]);
    assert_eq!(report.warnings().count(), 2);
}

#[test]
fn write_failure_aborts_the_run() {
    let fs = MemoryFilesystem::new().failing_on(Path::new("docs").join("b.mdx"));
    let tree = MetaTree::new()
        .with_leaf("a", "A")
        .with_leaf("b", "B")
        .with_leaf("c", "C");

    let service = ScaffoldService::new(Box::new(fs.clone()), ScaffoldOptions::default());
    let err = service.scaffold(&tree, "docs").unwrap_err();

    assert!(err.to_string().contains("b.mdx"));
    // no rollback: earlier pages stay, later ones are never attempted
    assert!(fs.exists(&Path::new("docs").join("a.mdx")));
    assert!(!fs.exists(&Path::new("docs").join("c.mdx")));
}

#[test]
fn custom_extension_and_index_name() {
    let fs = MemoryFilesystem::new();
    let options = ScaffoldOptions::default()
        .with_extension(".md")
        .with_index_name("README");
    let tree = MetaTree::new().with_branch("sql", "SQL", MetaTree::new().with_leaf("joins", "Joins"));

    ScaffoldService::new(Box::new(fs.clone()), options)
        .scaffold(&tree, "docs")
        .unwrap();

    assert_eq!(
        fs.list_files(),
        [
            PathBuf::from("docs/sql/README.md"),
            PathBuf::from("docs/sql/joins.md"),
        ]
    );
}

#[test]
fn discovered_tracks_scaffold_independently() {
    let temp = TempDir::new().unwrap();
    for (track, meta) in [
        ("python", r#"{ "index": "Python" }"#),
        ("sql", "index = \"SQL\"\nselect = \"SELECT\"\n"),
    ] {
        let dir = temp.path().join(track);
        fs::create_dir_all(&dir).unwrap();
        let name = if track == "sql" { "_meta.toml" } else { "_meta.json" };
        fs::write(dir.join(name), meta).unwrap();
    }

    let trees = TreeService::new(Box::new(FileMetaSource::new()));
    let service = local_service();
    for meta in trees.discover(temp.path()).unwrap() {
        let tree = trees.load(&meta).unwrap();
        let dir = meta.parent().unwrap();
        service.scaffold(&tree, dir).unwrap();
    }

    assert!(temp.path().join("python/index.mdx").is_file());
    assert!(temp.path().join("sql/index.mdx").is_file());
    assert!(temp.path().join("sql/select.mdx").is_file());
}
