// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for docscaff.
//!
//! This module contains pure logic with no I/O. Reading meta files and
//! touching the filesystem are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Read-only input**: The meta tree is never mutated by planning
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod planner;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::TopicKey,
    doc_structure::{
        DirectoryToCreate, DocStructure, FileToWrite, FsEntry, PageKind, SkipReason, SkippedEntry,
    },
    meta_tree::{MetaEntry, MetaNode, MetaTree, TreeStats},
    report::{Action, EntryKind, Outcome, ScaffoldReport},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PageContext, PageTemplate, ScaffoldOptions};

pub use validation::DomainValidator;
