use crate::domain::{
    entities::{MetaTree, common::TopicKey},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Every key in `tree`, at any depth, that cannot be used as a path segment.
    pub fn invalid_keys(tree: &MetaTree) -> Vec<DomainError> {
        let mut errors = Vec::new();
        collect_invalid_keys(tree, &mut errors);
        errors
    }
}

fn collect_invalid_keys(tree: &MetaTree, errors: &mut Vec<DomainError>) {
    for node in tree {
        if let Err(e) = TopicKey::try_new(node.key.as_str()) {
            errors.push(e);
        }
        if let crate::domain::MetaEntry::Branch { children, .. } = &node.entry {
            collect_invalid_keys(children, errors);
        }
    }
}
