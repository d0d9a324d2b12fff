use super::error::DomainError;

pub mod common;
pub mod doc_structure;
pub mod meta_tree;
pub mod report;

pub use doc_structure::*;
pub use meta_tree::*;
pub use report::*;
