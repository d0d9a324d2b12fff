use super::DomainError;
use std::fmt;
use std::path::Path;

/// A topic key that is safe to use as a single path segment.
///
/// Invariant: non-empty, not `.` or `..`, no `/`, `\` or NUL. Enforced at
/// construction, so joining a key onto a base directory can never escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicKey(String);

impl TopicKey {
    /// Fallible constructor.
    pub fn try_new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let reason = if key.is_empty() {
            Some("key is empty")
        } else if key == "." || key == ".." {
            Some("key refers to a relative directory")
        } else if key.contains('/') || key.contains('\\') {
            Some("key contains a path separator")
        } else if key.contains('\0') {
            Some("key contains a NUL byte")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidTopicKey {
                key,
                reason: reason.into(),
            }),
            None => Ok(Self(key)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for a page with this key, e.g. `intro.mdx`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl AsRef<Path> for TopicKey {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_are_accepted() {
        for key in ["index", "py_history", "-- Getting Started", "c++", "why_c"] {
            assert!(TopicKey::try_new(key).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn path_like_keys_are_rejected() {
        for key in ["", ".", "..", "a/b", "..\\up", "nul\0byte"] {
            assert!(
                matches!(
                    TopicKey::try_new(key),
                    Err(DomainError::InvalidTopicKey { .. })
                ),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn file_name_appends_extension() {
        let key = TopicKey::try_new("setup").unwrap();
        assert_eq!(key.file_name("mdx"), "setup.mdx");
    }
}
