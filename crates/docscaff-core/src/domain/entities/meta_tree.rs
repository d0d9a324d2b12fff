//! The meta tree: documentation topics and their hierarchy.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  MetaTree                                                   │
//! │  ├── "index"        → Leaf { "Overview" }                   │
//! │  ├── "--basics"     → Separator { "Basics" }                │
//! │  └── "setup"        → Branch { "Setup", children: MetaTree }│
//! │                         └── "venv" → Leaf { "Virtualenv" }  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tree is read-only input. Keys are kept as raw strings here; they are
//! validated into [`TopicKey`](super::common::TopicKey)s when planned, so a
//! bad key skips one entry instead of rejecting the whole tree.

use serde::Serialize;

/// One topic in a meta tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetaEntry {
    /// A topic with no children, materialised as a single page.
    Leaf { title: String },

    /// A topic with children, materialised as a directory plus index page.
    Branch { title: String, children: MetaTree },

    /// A navigation separator. Has no filesystem representation.
    Separator { title: String },

    /// A value of a shape the scaffolder does not understand.
    Unrecognized { shape: String },
}

/// A keyed entry in a [`MetaTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaNode {
    pub key: String,
    #[serde(flatten)]
    pub entry: MetaEntry,
}

/// Ordered mapping of topic keys to entries.
///
/// Order is the order of the source file. Scaffolding makes no ordering
/// promise, but keeping it makes logs follow the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetaTree {
    nodes: Vec<MetaNode>,
}

impl MetaTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, entry: MetaEntry) {
        self.nodes.push(MetaNode {
            key: key.into(),
            entry,
        });
    }

    pub fn with_leaf(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.push(
            key,
            MetaEntry::Leaf {
                title: title.into(),
            },
        );
        self
    }

    pub fn with_branch(
        mut self,
        key: impl Into<String>,
        title: impl Into<String>,
        children: MetaTree,
    ) -> Self {
        self.push(
            key,
            MetaEntry::Branch {
                title: title.into(),
                children,
            },
        );
        self
    }

    pub fn with_separator(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.push(
            key,
            MetaEntry::Separator {
                title: title.into(),
            },
        );
        self
    }

    pub fn with_unrecognized(mut self, key: impl Into<String>, shape: impl Into<String>) -> Self {
        self.push(
            key,
            MetaEntry::Unrecognized {
                shape: shape.into(),
            },
        );
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recursive entry counts and depth.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(1, &mut stats);
        stats
    }

    fn collect_stats(&self, depth: usize, stats: &mut TreeStats) {
        if !self.nodes.is_empty() {
            stats.depth = stats.depth.max(depth);
        }
        for node in &self.nodes {
            match &node.entry {
                MetaEntry::Leaf { .. } => stats.leaves += 1,
                MetaEntry::Branch { children, .. } => {
                    stats.branches += 1;
                    children.collect_stats(depth + 1, stats);
                }
                MetaEntry::Separator { .. } => stats.separators += 1,
                MetaEntry::Unrecognized { .. } => stats.unrecognized += 1,
            }
        }
    }
}

impl<'a> IntoIterator for &'a MetaTree {
    type Item = &'a MetaNode;
    type IntoIter = std::slice::Iter<'a, MetaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Summary counts for a meta tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub leaves: usize,
    pub branches: usize,
    pub separators: usize,
    pub unrecognized: usize,
    /// Deepest nesting level; 0 for an empty tree.
    pub depth: usize,
}

impl TreeStats {
    /// Pages a full scaffold would produce: one per leaf, one index per branch.
    pub fn pages(&self) -> usize {
        self.leaves + self.branches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetaTree {
        MetaTree::new()
            .with_separator("--start", "Getting Started")
            .with_leaf("index", "Overview")
            .with_branch(
                "setup",
                "Setup",
                MetaTree::new()
                    .with_leaf("venv", "Virtual Environments")
                    .with_branch(
                        "tools",
                        "Tools",
                        MetaTree::new().with_leaf("pip", "Using pip"),
                    ),
            )
            .with_unrecognized("broken", "number")
    }

    #[test]
    fn stats_count_every_level() {
        let stats = sample().stats();
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.branches, 2);
        assert_eq!(stats.separators, 1);
        assert_eq!(stats.unrecognized, 1);
        assert_eq!(stats.depth, 3);
        assert_eq!(stats.pages(), 5);
    }

    #[test]
    fn empty_tree_has_zero_depth() {
        assert_eq!(MetaTree::new().stats(), TreeStats::default());
    }

    #[test]
    fn preserves_insertion_order() {
        let tree = sample();
        let keys: Vec<_> = tree.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, ["--start", "index", "setup", "broken"]);
    }
}
