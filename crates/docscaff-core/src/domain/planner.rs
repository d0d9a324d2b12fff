//! Meta tree → [`DocStructure`] planning.
//!
//! The walk is pure: it decides every directory and page a scaffold run
//! needs without looking at the filesystem. Whether a path already exists is
//! the writer's concern.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{
    entities::{DocStructure, MetaEntry, MetaTree, PageKind, SkipReason, common::TopicKey},
    error::DomainError,
    value_objects::{PageContext, ScaffoldOptions},
};

/// Plan the materialisation of `tree` under `root`.
///
/// - leaf `k` → page `k.<ext>`
/// - branch `k` → directory `k/`, page `k/<index>.<ext>`, then `k`'s children
///   planned relative to `k/`
/// - separators, unrecognised shapes and unusable keys → skipped entries
///
/// # Errors
///
/// Returns [`DomainError::InvalidOptions`] if `options` fail validation.
/// Malformed tree entries never fail the plan.
pub fn plan(
    tree: &MetaTree,
    options: &ScaffoldOptions,
    root: impl Into<PathBuf>,
) -> Result<DocStructure, DomainError> {
    options.validate()?;

    let mut structure = DocStructure::new(root);
    walk(tree, Path::new(""), options, &mut structure);
    Ok(structure)
}

fn walk(tree: &MetaTree, base: &Path, options: &ScaffoldOptions, out: &mut DocStructure) {
    for node in tree {
        let key = match TopicKey::try_new(node.key.as_str()) {
            Ok(key) => key,
            Err(e) => {
                let reason = match e {
                    DomainError::InvalidTopicKey { reason, .. } => reason,
                    other => other.to_string(),
                };
                warn!(key = %node.key, %reason, "Skipped entry with unusable key");
                out.add_skipped(base, node.key.as_str(), SkipReason::InvalidKey(reason));
                continue;
            }
        };

        match &node.entry {
            MetaEntry::Leaf { title } => {
                let ctx = PageContext::new(&key, title);
                out.add_file(
                    base.join(key.file_name(&options.extension)),
                    title.as_str(),
                    ctx.render(&options.pages.leaf),
                    PageKind::Leaf,
                );
            }
            MetaEntry::Branch { title, children } => {
                let dir = base.join(&key);
                let ctx = PageContext::new(&key, title);
                out.add_directory(dir.clone());
                out.add_file(
                    dir.join(options.index_file_name()),
                    title.as_str(),
                    ctx.render(&options.pages.index),
                    PageKind::Index,
                );
                walk(children, &dir, options, out);
            }
            MetaEntry::Separator { title } => {
                info!(key = %key, %title, "Skipped separator");
                out.add_skipped(base, key.as_str(), SkipReason::Separator);
            }
            MetaEntry::Unrecognized { shape } => {
                warn!(key = %key, %shape, "Skipped unknown format");
                out.add_skipped(base, key.as_str(), SkipReason::Unrecognized(shape.clone()));
            }
        }
    }
}
