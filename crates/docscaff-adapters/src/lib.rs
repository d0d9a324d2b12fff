//! Infrastructure adapters for docscaff.
//!
//! This crate implements the ports defined in `docscaff_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod meta_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use meta_loader::{FileMetaSource, MetaFormat, parse_meta};
