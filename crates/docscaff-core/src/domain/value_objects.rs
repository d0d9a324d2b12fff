//! Domain value objects: page templates, render context, scaffold options.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! decide *what* a page looks like and *how* it is named; where it goes is
//! the planner's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::TopicKey, error::DomainError};

pub const DEFAULT_EXTENSION: &str = "mdx";
pub const DEFAULT_INDEX_NAME: &str = "index";

pub const DEFAULT_LEAF_PAGE: &str =
    "---\ntitle: {{TITLE}}\n---\n\n## {{TITLE}}\n\nContent coming soon...\n";
pub const DEFAULT_INDEX_PAGE: &str =
    "---\ntitle: {{TITLE}}\n---\n\n## {{TITLE}}\n\nOverview coming soon...\n";

// ── PageTemplate ─────────────────────────────────────────────────────────────

/// Placeholder bodies for generated pages.
///
/// Both bodies may use `{{TITLE}}` and `{{KEY}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub leaf: String,
    pub index: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            leaf: DEFAULT_LEAF_PAGE.into(),
            index: DEFAULT_INDEX_PAGE.into(),
        }
    }
}

// ── PageContext ──────────────────────────────────────────────────────────────

/// Variables available while rendering one page.
///
/// | Variable | Example      |
/// |----------|--------------|
/// | `TITLE`  | "Why Python?"|
/// | `KEY`    | "py_why"     |
#[derive(Debug, Clone)]
pub struct PageContext {
    variables: HashMap<String, String>,
}

impl PageContext {
    pub fn new(key: &TopicKey, title: &str) -> Self {
        let mut variables = HashMap::new();
        variables.insert("TITLE".to_string(), title.to_string());
        variables.insert("KEY".to_string(), key.as_str().to_string());
        Self { variables }
    }

    /// Replace `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders stay as literal text. Substituted values are not
    /// rescanned, so a title containing `{{KEY}}` is written verbatim.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = after[..end].trim();
                    match self.variables.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(&after[..end]);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ── ScaffoldOptions ──────────────────────────────────────────────────────────

/// How pages are named and what they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    /// Page file extension without the leading dot.
    pub extension: String,
    /// Stem of the index page written inside each branch directory.
    pub index_name: String,
    pub pages: PageTemplate,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.into(),
            index_name: DEFAULT_INDEX_NAME.into(),
            pages: PageTemplate::default(),
        }
    }
}

impl ScaffoldOptions {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    pub fn with_pages(mut self, pages: PageTemplate) -> Self {
        self.pages = pages;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.extension.is_empty() {
            return Err(DomainError::InvalidOptions("extension is empty".into()));
        }
        if self.extension.starts_with('.') {
            return Err(DomainError::InvalidOptions(format!(
                "extension '{}' must not start with '.'",
                self.extension
            )));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(DomainError::InvalidOptions(format!(
                "extension '{}' contains a path separator",
                self.extension
            )));
        }
        if self.extension.contains('\0') {
            return Err(DomainError::InvalidOptions(format!(
                "extension '{}' contains a NUL byte",
                self.extension.escape_default()
            )));
        }
        TopicKey::try_new(self.index_name.as_str()).map_err(|e| {
            DomainError::InvalidOptions(format!("index name '{}': {}", self.index_name, e))
        })?;
        Ok(())
    }

    /// File name of the index page, e.g. `index.mdx`.
    pub fn index_file_name(&self) -> String {
        format!("{}.{}", self.index_name, self.extension)
    }
}
