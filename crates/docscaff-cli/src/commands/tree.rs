//! Implementation of the `docscaff tree` command.

use std::path::PathBuf;

use serde::Serialize;

use docscaff_core::domain::{MetaEntry, MetaTree};

use crate::{
    cli::{TreeArgs, TreeFormat},
    commands::{meta_files, tree_service},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct NamedTree {
    path: PathBuf,
    tree: MetaTree,
}

pub fn execute(args: TreeArgs, output: OutputManager) -> CliResult<()> {
    let trees = tree_service();
    let loaded = meta_files(&trees, &args.path)?
        .into_iter()
        .map(|path| {
            let tree = trees.load(&path)?;
            Ok(NamedTree { path, tree })
        })
        .collect::<CliResult<Vec<_>>>()?;

    if args.format == TreeFormat::Json || output.is_json() {
        return match loaded.as_slice() {
            [one] => output.json(&one.tree),
            many => output.json(many),
        };
    }

    for named in &loaded {
        output.header(&named.path.display().to_string())?;
        for line in outline(&named.tree) {
            output.print(&line)?;
        }
    }
    Ok(())
}

/// Box-drawing outline, one line per entry.
pub fn outline(tree: &MetaTree) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(tree, "", &mut lines);
    lines
}

fn push_lines(tree: &MetaTree, prefix: &str, lines: &mut Vec<String>) {
    let count = tree.len();
    for (i, node) in tree.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "\u{2514}\u{2500}\u{2500} " } else { "\u{251c}\u{2500}\u{2500} " };

        let label = match &node.entry {
            MetaEntry::Leaf { title } => format!("{}  {}", node.key, title),
            MetaEntry::Branch { title, .. } => format!("{}/  {}", node.key, title),
            MetaEntry::Separator { title } => format!("{}  [separator] {}", node.key, title),
            MetaEntry::Unrecognized { shape } => format!("{}  [unknown: {}]", node.key, shape),
        };
        lines.push(format!("{prefix}{connector}{label}"));

        if let MetaEntry::Branch { children, .. } = &node.entry {
            let child_prefix = if last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}\u{2502}   ")
            };
            push_lines(children, &child_prefix, lines);
        }
    }
}
